pub mod components;
pub mod icons;
pub mod loading_timer;
