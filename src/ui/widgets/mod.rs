//! UI widgets

pub mod artwork;
pub mod item_card;

pub use artwork::{ArtworkCache, ArtworkWidget};
pub use item_card::ItemCard;
