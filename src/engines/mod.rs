//! Search engine module
//!
//! Defines the engine model, the built-in presets and shortcuts, and the
//! registry that owns the user's custom engines.

mod presets;
mod registry;
mod shortcuts;
mod types;

pub use presets::{preset_engines, PRESET_ENGINES};
pub use registry::{AddOutcome, EngineRegistry, DEFAULT_CUSTOM_CAPACITY};
pub use shortcuts::{Shortcut, ShortcutTable};
pub use types::*;
