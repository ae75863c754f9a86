//! Error types for QuickSearch
//!
//! Every error here is recoverable: its `Display` output is the message shown
//! back to the user, and none of them leave the registry or store half-written.

use thiserror::Error;

/// Rejection reasons for adding or updating a custom engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Engine name must not be empty")]
    EmptyName,

    #[error("\"{0}\" is a built-in engine name")]
    NameTaken(String),

    #[error("URL template must contain the {{query}} placeholder")]
    MissingPlaceholder,

    #[error("Malformed URL template: {0}")]
    MalformedUrl(String),

    #[error("Custom engine limit reached ({size} of {capacity} bytes)")]
    CapacityExceeded { size: usize, capacity: usize },
}

/// No custom engine carries the requested name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No custom engine named \"{0}\"")]
pub struct NotFoundError(pub String);

/// Failures while dispatching a slash command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown command: /{0}\nType /help to see available commands")]
    UnknownCommand(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Failures of the key-value store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Engine selection failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown engine: {0}")]
    UnknownEngine(String),
}

impl CommandError {
    /// Whether the user typed the command wrong rather than asking for something invalid
    pub fn is_usage(&self) -> bool {
        matches!(self, CommandError::Usage(_) | CommandError::UnknownCommand(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MissingPlaceholder.to_string(),
            "URL template must contain the {query} placeholder"
        );
        let err = CommandError::UnknownCommand("foo".to_string());
        assert!(err.to_string().starts_with("Unknown command: /foo"));
        assert!(err.is_usage());
    }

    #[test]
    fn test_transparent_wrapping() {
        let err: CommandError = NotFoundError("x".to_string()).into();
        assert_eq!(err.to_string(), "No custom engine named \"x\"");
        assert!(!err.is_usage());
    }
}
