//! Console command table and argument schemas

use crate::command::definition::ArgumentDefinition;
use crate::core::error::ConsoleError;
use crate::core::types::EntityKind;
use std::str::FromStr;

/// Commands understood by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Help,
    /// Echo how a line was tokenized and classified
    Args,
    /// Resolve one entity of a kind and describe it
    Lookup(EntityKind),
    /// List every search hit without resolving
    Find,
}

impl ConsoleCommand {
    pub const HELP: &'static [(&'static str, &'static str)] = &[
        ("help", "Show this list"),
        ("args <tokens...>", "Show how arguments are parsed"),
        ("hero <query>", "Describe one hero by id or name"),
        ("clan <query>", "Describe one clan by id or name"),
        ("settlement <query>", "Describe one settlement by id or name"),
        ("find <kind> <query> [limit] [verbose]", "List every match of a kind"),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConsoleCommand::Help => "help",
            ConsoleCommand::Args => "args",
            ConsoleCommand::Lookup(kind) => kind.label(),
            ConsoleCommand::Find => "find",
        }
    }

    /// Named-argument schema, in positional order
    pub fn schema(&self) -> Vec<ArgumentDefinition> {
        match self {
            ConsoleCommand::Help | ConsoleCommand::Args => Vec::new(),
            ConsoleCommand::Lookup(EntityKind::Settlement) => vec![ArgumentDefinition::required("query")
                .with_aliases(["settlement", "town", "name", "id"])],
            ConsoleCommand::Lookup(kind) => vec![ArgumentDefinition::required("query")
                .with_aliases([kind.label(), "name", "id"])],
            ConsoleCommand::Find => vec![
                ArgumentDefinition::required("kind").with_alias("type"),
                ArgumentDefinition::required("query").with_aliases(["name", "id"]),
                ArgumentDefinition::optional("limit").with_default("config"),
                ArgumentDefinition::optional("verbose").with_default("false"),
            ],
        }
    }
}

impl FromStr for ConsoleCommand {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "help" | "?" => Ok(ConsoleCommand::Help),
            "args" => Ok(ConsoleCommand::Args),
            "hero" => Ok(ConsoleCommand::Lookup(EntityKind::Hero)),
            "clan" => Ok(ConsoleCommand::Lookup(EntityKind::Clan)),
            "settlement" | "town" => Ok(ConsoleCommand::Lookup(EntityKind::Settlement)),
            "find" | "search" => Ok(ConsoleCommand::Find),
            _ => Err(ConsoleError::UnknownCommand(s.to_string())),
        }
    }
}
