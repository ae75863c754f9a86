//! QuickSearch: a keyboard-driven search launcher
//!
//! Classifies what the user typed into a slash command, a direct URL, a
//! shortcut search or a search on the selected engine, and manages the
//! user's custom engines.

pub mod commands;
pub mod config;
pub mod engines;
pub mod error;
pub mod launcher;
pub mod preview;
pub mod query;
pub mod selection;
pub mod store;

pub use config::Settings;
pub use engines::{Engine, EngineRegistry, ShortcutTable};
pub use launcher::{Launcher, Submission};
pub use query::{classify, preview_mode, QueryPlan};
pub use selection::SelectionState;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
