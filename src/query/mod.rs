//! Query classification module
//!
//! Turns raw launcher input into a [`QueryPlan`]:
//! - Slash commands: `/add`, `/remove`, `/list`, `/help`
//! - Bare URLs: `example.com`, `https://docs.rs/tokio`
//! - Shortcuts: `gh react hooks`, `yt lofi`
//! - Everything else searches the selected engine

mod resolver;

pub use resolver::{classify, is_bare_url, preview_mode};

use serde::{Deserialize, Serialize};

/// Label shown by the direct mode indicator for bare URLs
pub const DEFAULT_JUMP_LABEL: &str = "Jump";

/// What a submitted input resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryPlan {
    /// A slash command to run against the registry
    Command(Command),
    /// Navigate straight to a URL typed by the user
    DirectUrl { url: String },
    /// Search a site through a shortcut prefix
    Shortcut { url: String },
    /// Search the selected engine
    EngineSearch { url: String },
}

impl QueryPlan {
    /// The navigation target, if this plan navigates
    pub fn target_url(&self) -> Option<&str> {
        match self {
            Self::Command(_) => None,
            Self::DirectUrl { url } | Self::Shortcut { url } | Self::EngineSearch { url } => {
                Some(url)
            }
        }
    }

    /// Whether the plan bypasses the selected engine
    pub fn is_direct(&self) -> bool {
        matches!(self, Self::DirectUrl { .. } | Self::Shortcut { .. })
    }
}

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub verb: CommandVerb,
    pub params: Vec<String>,
}

/// Command verbs understood by the launcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandVerb {
    Add,
    Remove,
    List,
    Help,
    /// Anything else, lowercased
    Unknown(String),
}

impl CommandVerb {
    /// Parse a verb, ignoring case
    pub fn parse(verb: &str) -> Self {
        match verb.to_lowercase().as_str() {
            "add" => Self::Add,
            "remove" => Self::Remove,
            "list" => Self::List,
            "help" => Self::Help,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::List => "list",
            Self::Help => "help",
            Self::Unknown(verb) => verb,
        }
    }
}

impl std::fmt::Display for CommandVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.as_str())
    }
}

/// Live "direct mode" indication while typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectModeIndicator {
    /// Input is a bare URL
    Url,
    /// Input starts with a known shortcut
    Shortcut { display_name: &'static str },
}

impl DirectModeIndicator {
    /// Display label, using `jump_label` for bare URLs
    pub fn label<'a>(&self, jump_label: &'a str) -> &'a str {
        match self {
            Self::Url => jump_label,
            Self::Shortcut { display_name } => *display_name,
        }
    }
}

impl std::fmt::Display for DirectModeIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(DEFAULT_JUMP_LABEL))
    }
}
