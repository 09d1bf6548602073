pub mod articles;
pub mod courses;
pub mod home;
pub mod packages;

pub use articles::ArticlesPage;
pub use courses::CoursesPage;
pub use home::HomePage;
pub use packages::PackagesPage;
