pub mod catalog_view;
pub mod loading_gate;
pub mod newsletter;
pub mod site_config;
