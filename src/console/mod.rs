//! Console front end: dispatches lookup commands over a roster
//!
//! Every line goes through the same pipeline: host splitting, quote
//! resolution, classification, schema validation, then search and
//! resolution for commands that target an entity.

pub mod commands;
pub mod shell;

pub use commands::ConsoleCommand;
pub use shell::split_host_line;

use crate::command::arguments::{ParsedArguments, ValidatedArguments};
use crate::command::format::format_candidates;
use crate::command::resolver::{select_single, Candidate};
use crate::core::config::ConsoleConfig;
use crate::core::error::{ConsoleError, Result};
use crate::core::types::EntityKind;
use crate::world::Roster;
use ahash::AHashMap;
use tracing::{debug, info};

/// Read-only console over a roster
pub struct Console {
    roster: Roster,
    config: ConsoleConfig,
}

impl Console {
    pub fn new(roster: Roster, config: ConsoleConfig) -> Self {
        Self { roster, config }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Run one console line; `Ok(None)` for a blank line
    pub fn execute(&self, line: &str) -> Result<Option<String>> {
        let tokens = split_host_line(line);
        let Some((name, rest)) = tokens.split_first() else {
            return Ok(None);
        };

        let command: ConsoleCommand = name.parse()?;
        let args = ParsedArguments::parse(rest);
        debug!("{} <- {:?}", command.name(), args.all());

        let output = match command {
            ConsoleCommand::Help => help_text(),
            ConsoleCommand::Args => serde_json::to_string_pretty(&args)?,
            ConsoleCommand::Lookup(kind) => {
                let args = validate(command, args)?;
                self.describe(kind, required(&args, "query")?)?
            }
            ConsoleCommand::Find => {
                let args = validate(command, args)?;
                self.find(&args)?
            }
        };

        info!("Executed '{}'", command.name());
        Ok(Some(output))
    }

    fn describe(&self, kind: EntityKind, query: &str) -> Result<String> {
        match kind {
            EntityKind::Hero => {
                let hero = self.pick(&self.roster.search_heroes(query), query)?;
                let mut text = hero.to_string();
                if let Some(clan) = hero.clan.as_deref().and_then(|id| self.roster.clan(id)) {
                    text.push_str(&format!("\n  clan name: {}", clan.name));
                }
                Ok(text)
            }
            EntityKind::Clan => {
                let clan = self.pick(&self.roster.search_clans(query), query)?;
                let mut text = clan.to_string();
                if let Some(leader) = clan.leader.as_deref().and_then(|id| self.roster.hero(id)) {
                    text.push_str(&format!("\n  leader name: {}", leader.name));
                }
                Ok(text)
            }
            EntityKind::Settlement => {
                let settlement = self.pick(&self.roster.search_settlements(query), query)?;
                Ok(settlement.to_string())
            }
        }
    }

    /// Narrow search hits to one entity
    fn pick<'a, T: Candidate>(&self, hits: &[&'a T], query: &str) -> Result<&'a T> {
        let limit = self.config.max_listed_candidates.max(1);
        let chosen = select_single(hits, query, |competing| format_candidates(competing, limit))?;
        Ok(*chosen)
    }

    fn find(&self, args: &ValidatedArguments) -> Result<String> {
        let kind: EntityKind = required(args, "kind")?
            .parse()
            .map_err(ConsoleError::InvalidArguments)?;
        let query = required(args, "query")?;
        let default_limit = self.config.max_listed_candidates as i64;
        let limit = args.get_int("limit", 2, default_limit).max(1) as usize;
        let verbose = args.get_bool("verbose", 3, false);

        let listing = match kind {
            EntityKind::Hero => listing(&self.roster.search_heroes(query), limit),
            EntityKind::Clan => listing(&self.roster.search_clans(query), limit),
            EntityKind::Settlement => listing(&self.roster.search_settlements(query), limit),
        };

        let mut out = String::new();
        if verbose {
            let mut resolved = AHashMap::new();
            resolved.insert("kind".to_string(), kind.label().to_string());
            resolved.insert("query".to_string(), query.to_string());
            resolved.insert("limit".to_string(), limit.to_string());
            resolved.insert("verbose".to_string(), verbose.to_string());
            out.push_str(&args.format_argument_display(ConsoleCommand::Find.name(), &resolved));
            out.push('\n');
        }

        match listing {
            Some((count, text)) => {
                out.push_str(&format!("{} {} matching '{}':\n{}", count, kind.plural(), query, text));
            }
            None => out.push_str(&format!("No {} match '{}'", kind.plural(), query)),
        }
        Ok(out)
    }
}

fn listing<T: Candidate>(hits: &[&T], limit: usize) -> Option<(usize, String)> {
    if hits.is_empty() {
        None
    } else {
        Some((hits.len(), format_candidates(hits, limit)))
    }
}

/// Attach the command schema, rejecting unknown keys and missing arguments
fn validate(command: ConsoleCommand, args: ParsedArguments) -> Result<ValidatedArguments> {
    let args = args.with_schema(command.schema());
    if let Some(message) = args.validation_error() {
        return Err(ConsoleError::InvalidArguments(message));
    }
    if !args.missing_required().is_empty() {
        return Err(ConsoleError::Usage(args.usage(command.name())));
    }
    Ok(args)
}

fn required<'a>(args: &'a ValidatedArguments, name: &str) -> Result<&'a str> {
    args.value_of(name)
        .ok_or_else(|| ConsoleError::Usage(format!("Missing argument: {}", name)))
}

fn help_text() -> String {
    let mut text = String::from("Commands:");
    for (usage, description) in ConsoleCommand::HELP {
        text.push_str(&format!("\n  {:<40} - {}", usage, description));
    }
    text.push_str("\nArguments may be positional or named (key:value). Quote multi-word values: name:'Old Mill'");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> Console {
        Console::new(Roster::bundled().unwrap(), ConsoleConfig::default())
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert!(console().execute("   ").unwrap().is_none());
    }

    #[test]
    fn test_unknown_command() {
        let err = console().execute("declare_war vlandia").unwrap_err();
        assert!(matches!(err, ConsoleError::UnknownCommand(_)));
    }

    #[test]
    fn test_hero_by_exact_name() {
        let out = console().execute("hero derthert").unwrap().unwrap();
        assert!(out.starts_with("Derthert (id: lord_1_1)"));
        assert!(out.contains("clan name: dey Meroc"));
    }

    #[test]
    fn test_settlement_by_quoted_named_value() {
        let out = console().execute("settlement name:'Old Mill'").unwrap().unwrap();
        assert!(out.starts_with("Old Mill (id: village_V1_1)"));
    }

    #[test]
    fn test_clan_shows_leader_name() {
        let out = console().execute("clan paltos").unwrap().unwrap();
        assert!(out.contains("leader name: Rhagaea"));
    }

    #[test]
    fn test_unknown_named_argument_rejected() {
        let err = console().execute("hero who:derthert").unwrap_err();
        match err {
            ConsoleError::InvalidArguments(message) => {
                assert!(message.contains("who"));
                assert!(message.contains("query (aliases: hero, id, name)"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_query_shows_usage() {
        let err = console().execute("hero").unwrap_err();
        assert_eq!(err.to_string(), "Usage: hero <query>");
    }

    #[test]
    fn test_ambiguity_is_surfaced() {
        let err = console().execute("hero rhagaea").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("exactly matching 'rhagaea'"));
        assert!(message.contains("lord_3_1"));
        assert!(message.contains("lord_3_9"));
    }

    #[test]
    fn test_zero_listing_limit_still_names_a_candidate() {
        let config = ConsoleConfig {
            max_listed_candidates: 0,
            ..ConsoleConfig::default()
        };
        let console = Console::new(Roster::bundled().unwrap(), config);
        let message = console.execute("hero rhagaea").unwrap_err().to_string();
        assert!(message.contains("(id: lord_3_"));
        assert!(message.contains("... and 1 more"));
    }

    #[test]
    fn test_town_alias_accepts_town_key() {
        let out = console().execute("town town:pravend").unwrap().unwrap();
        assert!(out.starts_with("Pravend (id: town_V1)"));
    }

    #[test]
    fn test_find_lists_all_hits() {
        let out = console().execute("find settlement mill").unwrap().unwrap();
        assert!(out.starts_with("2 settlements matching 'mill':"));
        assert!(out.contains("Old Mill"));
        assert!(out.contains("Mill Creek"));
    }

    #[test]
    fn test_find_verbose_shows_argument_display() {
        let out = console()
            .execute("find kind:hero query:bob limit:1 verbose:yes")
            .unwrap()
            .unwrap();
        assert!(out.contains("<kind: hero>"));
        assert!(out.contains("[limit: 1]"));
        assert!(out.contains("... and 2 more"));
    }

    #[test]
    fn test_find_bad_kind() {
        let err = console().execute("find kingdom x").unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidArguments(_)));
    }

    #[test]
    fn test_args_echoes_json() {
        let out = console().execute("args a key:'b c'").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["positional"][0], "a");
        assert_eq!(value["named"][0]["key"], "key");
        assert_eq!(value["named"][0]["value"], "b c");
        assert_eq!(value["all"][1], "key:b c");
    }
}
