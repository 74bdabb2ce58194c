//! Catalog view engine
//!
//! Filtering, derived views, section visibility, debounced search input,
//! and scroll tracking. Nothing here depends on the terminal.

pub mod filter;
pub mod derive;
pub mod sections;
pub mod debounce;
pub mod scroll;

pub use filter::{FilterState, ItemFilter, matches};
pub use derive::{DerivedView, WorkshopGroup, ViewCache, derive, humanize_bench, parse_level};
pub use sections::{BulkAction, SectionVisibility};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use scroll::{SectionPosition, active_section, positions_at};
