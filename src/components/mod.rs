//! UI Components for Styleloft.

mod gallery;
mod item_card;
mod nav_header;
mod search_bar;

pub use gallery::BannerGallery;
pub use item_card::ItemCard;
pub use nav_header::{NavHeader, NavLocation};
pub use search_bar::SearchBar;
