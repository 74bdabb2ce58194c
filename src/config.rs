//! User settings
//!
//! Stored as JSON in the platform config directory. Missing or unreadable
//! settings fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings file name inside the config directory
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Quiet period before typed search text is applied
    pub search_debounce_ms: u64,
    /// Rows below the viewport top at which a section counts as active
    pub scroll_spy_threshold: i32,
    /// Catalog override file (defaults to assets/data/catalog.ron)
    pub catalog_path: Option<PathBuf>,
    /// Directory scanned by optimize-images
    pub image_dir: PathBuf,
    /// Event loop poll interval
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            scroll_spy_threshold: 2,
            catalog_path: None,
            image_dir: PathBuf::from("assets/img"),
            tick_rate_ms: 50,
        }
    }
}

impl Settings {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Get the settings file path
pub fn settings_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "arc-recycle", "ArcRecycle") {
        proj_dirs.config_dir().join(SETTINGS_FILE)
    } else {
        PathBuf::from(".").join(SETTINGS_FILE)
    }
}

/// Load settings from the default location
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, or defaults if it is missing or invalid
pub fn load_settings_from(path: &Path) -> Settings {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(settings) => {
                    log::info!("Settings loaded from {:?}", path);
                    return settings;
                }
                Err(e) => log::warn!("Failed to parse settings: {}, using defaults", e),
            },
            Err(e) => log::warn!("Failed to read settings: {}, using defaults", e),
        }
    }

    Settings::default()
}

/// Save settings to `path`, creating its directory
pub fn save_settings_to(settings: &Settings, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    log::info!("Settings saved to {:?}", path);
    Ok(())
}

/// Write default settings to `path` unless a file is already there.
///
/// Returns true if a file was written.
pub fn init_settings_file_at(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_settings_to(&Settings::default(), path)?;
    Ok(true)
}

/// Seed the default location with an editable settings file
pub fn init_settings_file() -> anyhow::Result<bool> {
    init_settings_file_at(&settings_path())
}
