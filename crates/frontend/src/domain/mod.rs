pub mod a001_package_category;
