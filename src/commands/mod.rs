//! Slash command execution
//!
//! Commands manage the custom engine list: `/add`, `/remove`, `/list`, `/help`.

mod help;

pub use help::HELP_TEXT;

use crate::engines::{AddOutcome, EngineRegistry};
use crate::error::CommandError;
use crate::query::{Command, CommandVerb};
use tracing::info;

const ADD_USAGE: &str = "/add <name> <url template> [domain]";
const REMOVE_USAGE: &str = "/remove <name>";
const LIST_USAGE: &str = "/list";

/// Successful result of a command, displayed to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added(String),
    Updated(String),
    Removed(String),
    /// `name — domain` lines for every custom engine
    Listing(Vec<String>),
    /// `/list` with no custom engines
    Empty,
    Help(&'static str),
}

impl CommandOutcome {
    /// Whether the command changed the registry
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Added(_) | Self::Updated(_) | Self::Removed(_))
    }
}

impl std::fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added(name) => write!(f, "Added search engine \"{}\"", name),
            Self::Updated(name) => write!(f, "Search engine \"{}\" updated", name),
            Self::Removed(name) => write!(f, "Removed search engine \"{}\"", name),
            Self::Listing(lines) => write!(f, "{}", lines.join("\n")),
            Self::Empty => write!(f, "No custom engines"),
            Self::Help(text) => write!(f, "{}", text),
        }
    }
}

/// Run a parsed command against the registry
pub fn apply_command(
    command: &Command,
    registry: &mut EngineRegistry,
) -> Result<CommandOutcome, CommandError> {
    let params = &command.params;

    match &command.verb {
        CommandVerb::Add => {
            let [name, url_template, rest @ ..] = params.as_slice() else {
                return Err(CommandError::Usage(ADD_USAGE));
            };
            let domain = rest.first().map(String::as_str);

            let outcome = registry.add_or_update(name, url_template, domain)?;
            info!("Custom engine {} saved ({:?})", name, outcome);
            Ok(match outcome {
                AddOutcome::Added => CommandOutcome::Added(name.clone()),
                AddOutcome::Updated => CommandOutcome::Updated(name.clone()),
            })
        }
        CommandVerb::Remove => {
            let Some(name) = params.first() else {
                return Err(CommandError::Usage(REMOVE_USAGE));
            };

            registry.remove(name)?;
            info!("Custom engine {} removed", name);
            Ok(CommandOutcome::Removed(name.clone()))
        }
        CommandVerb::List => {
            if !params.is_empty() {
                return Err(CommandError::Usage(LIST_USAGE));
            }

            let engines = registry.list();
            if engines.is_empty() {
                return Ok(CommandOutcome::Empty);
            }
            Ok(CommandOutcome::Listing(
                engines
                    .iter()
                    .map(|e| format!("{} — {}", e.name, e.domain))
                    .collect(),
            ))
        }
        CommandVerb::Help => Ok(CommandOutcome::Help(HELP_TEXT)),
        CommandVerb::Unknown(verb) => Err(CommandError::UnknownCommand(verb.clone())),
    }
}
