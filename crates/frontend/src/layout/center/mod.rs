pub mod center;
pub mod page;

pub use center::Center;
