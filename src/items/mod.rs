//! Item system

pub mod item;

pub use item::{Item, Tier, Category, format_value};
