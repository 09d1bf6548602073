pub mod card_animated;
pub mod newsletter;
pub mod page_header;
pub mod pagination_controls;
pub mod skeleton_loader;
