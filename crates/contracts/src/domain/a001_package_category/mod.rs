pub mod aggregate;
pub mod catalog;

pub use aggregate::{Category, CategoryId};
pub use catalog::{load_catalog, package_categories};
