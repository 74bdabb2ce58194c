//! User Interface module
//!
//! Terminal UI using ratatui: search bar, category chips, navigation
//! sidebar and the scrollable catalog.

pub mod app;
pub mod content;
pub mod sidebar;
pub mod theme;
pub mod widgets;

pub use app::{App, Focus};
