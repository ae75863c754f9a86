//! Flat key-value persistence
//!
//! The launcher only ever needs string keys and string values, read once at
//! startup and written after every mutation.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use std::sync::Arc;

/// Key holding the JSON array of custom engines
pub const CUSTOM_ENGINES_KEY: &str = "customSearchEngines";
/// Key holding the selected engine's name
pub const SELECTED_NAME_KEY: &str = "selectedEngineName";
/// Key holding the selected engine's URL template or prefix
pub const SELECTED_URL_KEY: &str = "selectedEngineUrl";

/// String-keyed store shared by the registry and the selection state
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store handle shared across the launcher's components
pub type SharedStore = Arc<dyn KeyValueStore>;
