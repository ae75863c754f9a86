//! Launcher state owned by the front end
//!
//! Bundles the store, the engine registry, the current selection and the
//! shortcut table into one explicit instance.

mod navigator;

pub use navigator::{Navigator, PrintOnly, SystemBrowser};

use crate::commands::{apply_command, CommandOutcome};
use crate::config::{Settings, StoreBackend};
use crate::engines::{Engine, EngineRegistry, ShortcutTable};
use crate::error::{CommandError, SelectionError};
use crate::query::{classify, preview_mode, QueryPlan};
use crate::selection::SelectionState;
use crate::store::{JsonFileStore, MemoryStore, SharedStore};
use std::sync::Arc;
use tracing::info;

/// What the front end should do after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Open `url`; `direct` is set for bare URLs and shortcuts
    Navigate { url: String, direct: bool },
    /// A slash command ran; show its outcome
    Command(Result<CommandOutcome, CommandError>),
}

/// Explicit launcher state
pub struct Launcher {
    store: SharedStore,
    registry: EngineRegistry,
    selection: SelectionState,
    shortcuts: Arc<ShortcutTable>,
    jump_label: String,
}

impl Launcher {
    /// Build a launcher over an existing store
    pub fn new(store: SharedStore, settings: &Settings) -> Self {
        let registry = EngineRegistry::from_store(store.clone(), settings.registry.custom_capacity);
        let selection = SelectionState::load(&store, &registry);
        let shortcuts = if settings.launcher.shortcuts_enabled {
            ShortcutTable::builtin()
        } else {
            ShortcutTable::empty()
        };

        info!(
            "Launcher ready: {} engines, selected {}",
            registry.len(),
            selection.selected_engine_name
        );

        Self {
            store,
            registry,
            selection,
            shortcuts: Arc::new(shortcuts),
            jump_label: settings.preview.direct_label.clone(),
        }
    }

    /// Open the configured store backend and build a launcher over it
    pub fn from_settings(settings: &Settings) -> Self {
        let store: SharedStore = match settings.store.backend {
            StoreBackend::File => {
                let file = JsonFileStore::open(settings.store.resolved_path());
                info!("Using store file {}", file.path().display());
                Arc::new(file)
            }
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
        };
        Self::new(store, settings)
    }

    pub fn registry(&self) -> &EngineRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Shared handle to the shortcut table, e.g. for a live preview
    pub fn shortcuts(&self) -> Arc<ShortcutTable> {
        self.shortcuts.clone()
    }

    /// Engines in menu order
    pub fn engines(&self) -> Vec<&Engine> {
        self.registry.all().collect()
    }

    /// Placeholder text for the input box
    pub fn placeholder(&self) -> String {
        self.selection.placeholder()
    }

    /// Bytes used by the custom engine list and the configured cap
    pub fn storage_usage(&self) -> (usize, usize) {
        (self.registry.serialized_len(), self.registry.capacity())
    }

    /// Direct mode label for the current input, if any
    pub fn preview(&self, input: &str) -> Option<&str> {
        preview_mode(input, &self.shortcuts).map(|indicator| indicator.label(&self.jump_label))
    }

    /// Classify without side effects
    pub fn classify(&self, input: &str) -> QueryPlan {
        classify(input, &self.selection, &self.registry, &self.shortcuts)
    }

    /// Handle a submitted input. Blank input is ignored.
    pub fn submit(&mut self, input: &str) -> Option<Submission> {
        if input.trim().is_empty() {
            return None;
        }

        let submission = match self.classify(input) {
            QueryPlan::Command(command) => {
                Submission::Command(apply_command(&command, &mut self.registry))
            }
            QueryPlan::DirectUrl { url } | QueryPlan::Shortcut { url } => {
                Submission::Navigate { url, direct: true }
            }
            QueryPlan::EngineSearch { url } => Submission::Navigate { url, direct: false },
        };
        Some(submission)
    }

    /// Select an engine by name
    pub fn select_engine(&mut self, name: &str) -> Result<(), SelectionError> {
        self.selection.select(name, &self.registry, &self.store)
    }

    /// Select the first engine whose name starts with `letter`
    pub fn quick_select(&mut self, letter: char) -> Option<&SelectionState> {
        let name = self.registry.quick_select(letter)?.name.clone();
        self.select_engine(&name).ok()?;
        Some(&self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launcher() -> Launcher {
        Launcher::new(Arc::new(MemoryStore::new()), &Settings::default())
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut launcher = launcher();
        assert!(launcher.submit("   ").is_none());
        assert!(launcher.submit("").is_none());
    }

    #[test]
    fn test_submit_search() {
        let mut launcher = launcher();
        assert_eq!(
            launcher.submit("hello world"),
            Some(Submission::Navigate {
                url: "https://www.bing.com/search?q=hello%20world".to_string(),
                direct: false,
            })
        );
    }

    #[test]
    fn test_submit_command_then_select() {
        let mut launcher = launcher();
        let result = launcher.submit("/add Crates https://crates.io/search?q={query}");
        assert_eq!(
            result,
            Some(Submission::Command(Ok(CommandOutcome::Added("Crates".to_string()))))
        );

        launcher.select_engine("Crates").unwrap();
        assert_eq!(launcher.placeholder(), "Search with Crates...");
        assert_eq!(
            launcher.submit("tokio"),
            Some(Submission::Navigate {
                url: "https://crates.io/search?q=tokio".to_string(),
                direct: false,
            })
        );
    }

    #[test]
    fn test_preview_uses_configured_label() {
        let mut settings = Settings::default();
        settings.preview.direct_label = "Go".to_string();
        let launcher = Launcher::new(Arc::new(MemoryStore::new()), &settings);

        assert_eq!(launcher.preview("example.com"), Some("Go"));
        assert_eq!(launcher.preview("db books"), Some("Douban"));
        assert_eq!(launcher.preview("/help"), None);
    }

    #[test]
    fn test_shortcuts_disabled() {
        let mut settings = Settings::default();
        settings.launcher.shortcuts_enabled = false;
        let launcher = Launcher::new(Arc::new(MemoryStore::new()), &settings);

        assert!(!launcher.classify("gh rust").is_direct());
    }

    #[test]
    fn test_quick_select() {
        let mut launcher = launcher();
        let selection = launcher.quick_select('b').unwrap();
        assert_eq!(selection.selected_engine_name, "Bing");
        assert!(launcher.quick_select('q').is_none());
        assert_eq!(launcher.engines().len(), 3);
    }

    #[test]
    fn test_storage_usage_tracks_custom_list() {
        let mut settings = Settings::default();
        settings.registry.custom_capacity = 500;
        let mut launcher = Launcher::new(Arc::new(MemoryStore::new()), &settings);
        assert_eq!(launcher.storage_usage(), (2, 500));

        launcher.submit("/add A https://a.com/{query}");
        let (used, capacity) = launcher.storage_usage();
        assert_eq!(used, launcher.registry().serialized_len());
        assert!(used > 2);
        assert_eq!(capacity, 500);
    }

    #[test]
    fn test_file_store_from_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.store.backend = StoreBackend::File;
        settings.store.path = Some(dir.path().join("nested").join("store.json"));

        let launcher = Launcher::from_settings(&settings);
        assert_eq!(launcher.selection().selected_engine_name, "Bing");
        assert!(dir.path().join("nested").join("store.json").exists());
    }
}
