//! Configuration module for QuickSearch
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "QUICKSEARCH_SETTINGS_PATH";

/// Load settings from an explicit path, the usual locations, or defaults.
///
/// Environment overrides are applied last in every case.
pub fn load(explicit: Option<PathBuf>) -> Result<Settings> {
    let candidates = explicit
        .into_iter()
        .chain(std::env::var(SETTINGS_PATH_ENV).ok().map(PathBuf::from))
        .chain(default_locations());

    for path in candidates {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

fn default_locations() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("quicksearch.yml"),
        PathBuf::from("config/quicksearch.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("quicksearch/settings.yml"));
    }
    paths
}
