//! Engine registry for preset and custom search engines

use super::presets::preset_engines;
use super::types::{domain_of, parse_template, Engine, QUERY_PLACEHOLDER};
use crate::error::{NotFoundError, ValidationError};
use crate::store::{SharedStore, CUSTOM_ENGINES_KEY};
use tracing::{debug, info, warn};

/// Default cap on the serialized size of the custom engine list, in bytes
pub const DEFAULT_CUSTOM_CAPACITY: usize = 20_000;

/// Result of a successful `add_or_update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new custom engine was appended
    Added,
    /// An existing custom engine was replaced in place
    Updated,
}

/// Registry of preset engines and the user's custom engines
pub struct EngineRegistry {
    /// Built-in engines, in declaration order
    presets: Vec<Engine>,
    /// User engines, in insertion order
    custom: Vec<Engine>,
    /// Backing store for the custom list
    store: SharedStore,
    /// Maximum serialized size of the custom list
    capacity: usize,
}

impl EngineRegistry {
    /// Create a registry with the built-in presets, loading custom engines
    /// from the store.
    ///
    /// Missing or unparsable data yields an empty custom list.
    pub fn from_store(store: SharedStore, capacity: usize) -> Self {
        let custom = Self::load_custom(&store);
        info!("Loaded {} custom engines", custom.len());

        Self {
            presets: preset_engines(),
            custom,
            store,
            capacity,
        }
    }

    fn load_custom(store: &SharedStore) -> Vec<Engine> {
        let Some(raw) = store.get(CUSTOM_ENGINES_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<Engine>>(&raw) {
            Ok(engines) => engines,
            Err(e) => {
                warn!("Failed to load custom engines: {}", e);
                Vec::new()
            }
        }
    }

    /// Preset engines in declaration order
    pub fn presets(&self) -> &[Engine] {
        &self.presets
    }

    /// Custom engines in insertion order
    pub fn custom(&self) -> &[Engine] {
        &self.custom
    }

    /// Custom engines, for display
    pub fn list(&self) -> &[Engine] {
        self.custom()
    }

    /// Every engine in menu order: presets, then custom engines
    pub fn all(&self) -> impl Iterator<Item = &Engine> {
        self.presets.iter().chain(self.custom.iter())
    }

    /// Find an engine by exact name, searching presets before custom engines
    pub fn find_by_name(&self, name: &str) -> Option<&Engine> {
        self.all().find(|e| e.name == name)
    }

    /// First engine in menu order whose name starts with `letter`, ignoring case
    pub fn quick_select(&self, letter: char) -> Option<&Engine> {
        let letter = letter.to_lowercase().collect::<String>();
        self.all()
            .find(|e| e.name.to_lowercase().starts_with(letter.as_str()))
    }

    /// Add a custom engine, or replace the custom engine with the same name.
    ///
    /// When `domain` is `None` it is derived from the template's hostname.
    pub fn add_or_update(
        &mut self,
        name: &str,
        url_template: &str,
        domain: Option<&str>,
    ) -> Result<AddOutcome, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.presets.iter().any(|e| e.name == name) {
            return Err(ValidationError::NameTaken(name.to_string()));
        }
        if !url_template.contains(QUERY_PLACEHOLDER) {
            return Err(ValidationError::MissingPlaceholder);
        }
        parse_template(url_template).map_err(ValidationError::MalformedUrl)?;

        let engine = Engine::new(
            name,
            url_template,
            domain.map_or_else(|| domain_of(url_template), str::to_string),
        );

        let outcome = match self.custom.iter().position(|e| e.name == name) {
            Some(index) => {
                self.custom[index] = engine;
                AddOutcome::Updated
            }
            None => {
                let size = Self::serialized_len_with(&self.custom, &engine);
                if size > self.capacity {
                    return Err(ValidationError::CapacityExceeded {
                        size,
                        capacity: self.capacity,
                    });
                }
                self.custom.push(engine);
                AddOutcome::Added
            }
        };

        debug!("Custom engine {} {:?}", name, outcome);
        self.persist();
        Ok(outcome)
    }

    /// Remove a custom engine by exact name. Presets cannot be removed.
    pub fn remove(&mut self, name: &str) -> Result<(), NotFoundError> {
        let index = self
            .custom
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| NotFoundError(name.to_string()))?;

        self.custom.remove(index);
        debug!("Removed custom engine {}", name);
        self.persist();
        Ok(())
    }

    /// Serialized size of the current custom list, in bytes
    pub fn serialized_len(&self) -> usize {
        serde_json::to_string(&self.custom).map_or(0, |s| s.len())
    }

    fn serialized_len_with(custom: &[Engine], extra: &Engine) -> usize {
        let mut candidate = custom.to_vec();
        candidate.push(extra.clone());
        serde_json::to_string(&candidate).map_or(usize::MAX, |s| s.len())
    }

    /// Maximum serialized size of the custom list
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Write the custom list back to the store. Failures are logged, not raised.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.custom) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize custom engines: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(CUSTOM_ENGINES_KEY, &json) {
            warn!("Failed to save custom engines: {}", e);
        }
    }

    /// Number of engines, presets included
    pub fn len(&self) -> usize {
        self.presets.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
