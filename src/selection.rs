//! Currently selected search engine

use crate::engines::{Engine, EngineRegistry};
use crate::error::SelectionError;
use crate::store::{SharedStore, SELECTED_NAME_KEY, SELECTED_URL_KEY};
use tracing::{debug, warn};

/// The engine plain searches go to, persisted after every change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_engine_name: String,
    pub selected_engine_url: String,
}

impl SelectionState {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            selected_engine_name: name.into(),
            selected_engine_url: url.into(),
        }
    }

    /// Restore the persisted selection.
    ///
    /// The stored name and URL must both match one engine of the registry;
    /// otherwise the first preset is selected. The result is written back.
    pub fn load(store: &SharedStore, registry: &EngineRegistry) -> Self {
        let saved = store.get(SELECTED_NAME_KEY).zip(store.get(SELECTED_URL_KEY));

        let restored = saved.and_then(|(name, url)| {
            registry
                .all()
                .find(|e| e.name == name && e.url == url)
                .map(Self::from_engine)
        });

        let selection = match restored {
            Some(selection) => selection,
            None => registry
                .presets()
                .first()
                .map(Self::from_engine)
                .unwrap_or_else(|| Self::new("", "")),
        };

        debug!("Selected engine: {}", selection.selected_engine_name);
        selection.persist(store);
        selection
    }

    fn from_engine(engine: &Engine) -> Self {
        Self::new(engine.name.clone(), engine.url.clone())
    }

    /// Select an engine by name and persist the choice
    pub fn select(
        &mut self,
        name: &str,
        registry: &EngineRegistry,
        store: &SharedStore,
    ) -> Result<(), SelectionError> {
        let engine = registry
            .find_by_name(name)
            .ok_or_else(|| SelectionError::UnknownEngine(name.to_string()))?;

        *self = Self::from_engine(engine);
        self.persist(store);
        Ok(())
    }

    /// Input placeholder text for the selected engine
    pub fn placeholder(&self) -> String {
        format!("Search with {}...", self.selected_engine_name)
    }

    fn persist(&self, store: &SharedStore) {
        let result = store
            .set(SELECTED_NAME_KEY, &self.selected_engine_name)
            .and_then(|_| store.set(SELECTED_URL_KEY, &self.selected_engine_url));
        if let Err(e) = result {
            warn!("Failed to save selected engine: {}", e);
        }
    }
}
