//! Catalog data
//!
//! The item catalog, its compiled-in defaults, and RON override loading.

pub mod catalog;
pub mod items;
pub mod loader;

pub use catalog::{Bucket, Catalog, BenchLevels, WorkshopUpgrades};
pub use items::default_catalog;
pub use loader::{
    export_default_catalog, load_catalog, load_catalog_file, CatalogError, CatalogSource,
};
