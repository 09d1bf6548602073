pub mod card;
pub mod list;

pub use card::CategoryCard;
pub use list::PackageCategoryList;
