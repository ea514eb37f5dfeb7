//! Sidebar navigation core.
//!
//! Pure state and lookup logic behind the admin sidebar:
//! - `route_matcher` - maps the current path to the active section/submenu
//! - `expansion` - sticky accordion state (expanded sections and submenus)
//! - `search` - case-insensitive substring search over the page catalog
//! - `search_box` - open/closed state machine of the sidebar search box
//! - `tree` - static section/submenu/item hierarchy
//!
//! All static data comes from `catalog.json`, compiled in by `build.rs`.

pub mod catalog;
pub mod expansion;
pub mod route_matcher;
pub mod search;
pub mod search_box;
pub mod tree;

pub use catalog::{SectionId, SubmenuId, NAV_SECTIONS, ROUTE_PATTERNS, SEARCH_RECORDS};
pub use expansion::{ExpansionKind, ExpansionState};
pub use route_matcher::{ActiveRoute, PathMatch, RoutePattern, RouteTable, RouteTableError};
pub use search::{SearchIndex, SearchRecord, MAX_RESULTS};
pub use search_box::{Navigator, SearchBox};
pub use tree::{NavItem, NavSection, NavSubmenu};
