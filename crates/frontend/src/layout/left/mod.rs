pub mod left;
pub mod sidebar;
pub mod sidebar_search;

pub use left::Left;
pub use sidebar::Sidebar;
pub use sidebar_search::SidebarSearch;
