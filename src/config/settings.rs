//! Settings structures for QuickSearch configuration

use crate::engines::DEFAULT_CUSTOM_CAPACITY;
use crate::preview::DEFAULT_DEBOUNCE_MS;
use crate::query::DEFAULT_JUMP_LABEL;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub store: StoreSettings,
    pub registry: RegistrySettings,
    pub preview: PreviewSettings,
    pub launcher: LauncherSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (QUICKSEARCH_* prefix)
    pub fn merge_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("QUICKSEARCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = lookup("QUICKSEARCH_LOG_LEVEL") {
            self.general.log_level = val;
        }
        if let Some(val) = lookup("QUICKSEARCH_STORE_BACKEND") {
            if let Some(backend) = StoreBackend::parse(&val) {
                self.store.backend = backend;
            }
        }
        if let Some(val) = lookup("QUICKSEARCH_STORE_PATH") {
            self.store.path = Some(PathBuf::from(val));
        }
        if let Some(val) = lookup("QUICKSEARCH_CUSTOM_CAPACITY") {
            if let Ok(capacity) = val.parse() {
                self.registry.custom_capacity = capacity;
            }
        }
        if let Some(val) = lookup("QUICKSEARCH_DEBOUNCE_MS") {
            if let Ok(ms) = val.parse() {
                self.preview.debounce_ms = ms;
            }
        }
    }

    /// Effective log filter directive
    pub fn log_filter(&self) -> &str {
        if self.general.debug {
            "debug"
        } else {
            &self.general.log_level
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "info".to_string(),
        }
    }
}

/// Where engine configuration is persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// JSON file on disk
    #[default]
    File,
    /// Nothing survives the process
    Memory,
}

impl StoreBackend {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "file" => Some(Self::File),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Store settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    /// Store file; defaults to the user data directory
    pub path: Option<PathBuf>,
}

impl StoreSettings {
    /// The store file path, explicit or default
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|dir| dir.join("quicksearch").join("store.json"))
                .unwrap_or_else(|| PathBuf::from("quicksearch-store.json"))
        })
    }
}

/// Engine registry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Cap on the serialized custom engine list, in bytes
    pub custom_capacity: usize,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            custom_capacity: DEFAULT_CUSTOM_CAPACITY,
        }
    }
}

/// Live preview settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Quiet period before the indicator is recomputed
    pub debounce_ms: u64,
    /// Indicator label for bare URLs
    pub direct_label: String,
}

impl PreviewSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            direct_label: DEFAULT_JUMP_LABEL.to_string(),
        }
    }
}

/// Launcher behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherSettings {
    /// Open navigation targets in the system browser instead of printing them
    pub open_in_browser: bool,
    /// Recognize the built-in shortcut prefixes
    pub shortcuts_enabled: bool,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            open_in_browser: true,
            shortcuts_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.registry.custom_capacity, 20_000);
        assert_eq!(settings.preview.debounce(), Duration::from_millis(100));
        assert_eq!(settings.store.backend, StoreBackend::File);
        assert!(settings.launcher.open_in_browser);
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_partial_yaml() {
        let settings: Settings = serde_yaml::from_str(
            "store:\n  backend: memory\nregistry:\n  custom_capacity: 512\n",
        )
        .unwrap();
        assert_eq!(settings.store.backend, StoreBackend::Memory);
        assert_eq!(settings.registry.custom_capacity, 512);
        assert_eq!(settings.preview.direct_label, "Jump");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("QUICKSEARCH_DEBUG", "true"),
            ("QUICKSEARCH_STORE_BACKEND", "Memory"),
            ("QUICKSEARCH_STORE_PATH", "/tmp/qs.json"),
            ("QUICKSEARCH_DEBOUNCE_MS", "not a number"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert!(settings.general.debug);
        assert_eq!(settings.log_filter(), "debug");
        assert_eq!(settings.store.backend, StoreBackend::Memory);
        assert_eq!(settings.store.resolved_path(), PathBuf::from("/tmp/qs.json"));
        assert_eq!(settings.preview.debounce_ms, 100);
    }
}
