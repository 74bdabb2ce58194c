//! RON catalog loader
//!
//! Loads the catalog from an external RON file, with fallback to the
//! compiled-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::catalog::Catalog;
use super::items::default_catalog;

/// Default location of the catalog override file
pub const DEFAULT_CATALOG_PATH: &str = "assets/data/catalog.ron";

/// Catalog file name used by export
const CATALOG_FILE: &str = "catalog.ron";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] ron::Error),
}

/// Where the active catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Compiled-in defaults
    BuiltIn,
    /// Loaded from a RON file
    File(PathBuf),
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::BuiltIn => f.write_str("built-in defaults"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read and parse a catalog RON file
pub fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the catalog, preferring `override_path` (or the default asset path)
/// and falling back to built-in data when the file is missing or broken.
pub fn load_catalog(override_path: Option<&Path>) -> (Catalog, CatalogSource) {
    let path = override_path.unwrap_or_else(|| Path::new(DEFAULT_CATALOG_PATH));

    if path.exists() {
        match load_catalog_file(path) {
            Ok(catalog) => {
                log::info!("Catalog loaded from {:?} ({} entries)", path, catalog.len());
                return (catalog, CatalogSource::File(path.to_path_buf()));
            }
            Err(e) => log::warn!("{}. Using built-in catalog.", e),
        }
    } else if override_path.is_some() {
        log::warn!("Catalog file {:?} not found. Using built-in catalog.", path);
    }

    (default_catalog(), CatalogSource::BuiltIn)
}

/// Export the built-in catalog to `dir/catalog.ron` for editing
pub fn export_default_catalog(dir: &Path) -> Result<PathBuf, CatalogError> {
    fs::create_dir_all(dir).map_err(|source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let catalog = default_catalog();
    let content = ron::ser::to_string_pretty(&catalog, ron::ser::PrettyConfig::default())?;

    let path = dir.join(CATALOG_FILE);
    fs::write(&path, content).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!("Exported built-in catalog to {:?}", path);
    Ok(path)
}
