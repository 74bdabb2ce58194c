//! arc-recycle - ARC Raiders recycling cheat sheet
//!
//! A filterable terminal catalog of what to keep for quests and projects,
//! what is safe to recycle, and what each workshop upgrade needs.

pub mod items;
pub mod data;
pub mod view;
pub mod config;
pub mod assets;
pub mod ui;

// Re-export commonly used types
pub use data::{Bucket, Catalog};
pub use items::{Category, Item, Tier};
pub use view::{derive, DerivedView, FilterState, SectionVisibility, ViewCache};
