pub mod categories;

pub use categories::normalize_category;
