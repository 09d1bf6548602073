pub mod icon_tag;
