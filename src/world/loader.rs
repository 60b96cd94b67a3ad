//! Load rosters from TOML files
//!
//! A roster file has three optional arrays of tables: `[[heroes]]`,
//! `[[clans]]` and `[[settlements]]`. Ids must be non-empty and unique
//! within their kind, otherwise lookups by exact id would be unreliable.

use crate::core::types::EntityKind;
use crate::world::entities::{Clan, Hero, Settlement};
use crate::world::roster::Roster;
use ahash::AHashSet;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const BUNDLED_ROSTER: &str = include_str!("../../data/roster.toml");

/// Errors that can occur when loading a roster
#[derive(Debug, Error)]
pub enum LoadError {
    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
    /// An entity has an empty or whitespace-only id
    #[error("A {kind} named '{name}' has an empty id")]
    EmptyId { kind: EntityKind, name: String },
    /// Two entities of the same kind share an id
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: EntityKind, id: String },
    /// File I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Default, Deserialize)]
struct RosterFile {
    #[serde(default)]
    heroes: Vec<Hero>,
    #[serde(default)]
    clans: Vec<Clan>,
    #[serde(default)]
    settlements: Vec<Settlement>,
}

impl Roster {
    /// Parse and validate a roster from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let file: RosterFile = toml::from_str(content)?;

        check_ids(EntityKind::Hero, file.heroes.iter().map(|h| (&h.id, &h.name)))?;
        check_ids(EntityKind::Clan, file.clans.iter().map(|c| (&c.id, &c.name)))?;
        check_ids(
            EntityKind::Settlement,
            file.settlements.iter().map(|s| (&s.id, &s.name)),
        )?;

        Ok(Roster::new(file.heroes, file.clans, file.settlements))
    }

    /// Load a roster file from disk
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let roster = Self::from_toml_str(&content)?;
        tracing::info!("Loaded {} roster entries from {}", roster.len(), path.display());
        Ok(roster)
    }

    /// The roster shipped with the crate
    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_toml_str(BUNDLED_ROSTER)
    }
}

fn check_ids<'a>(
    kind: EntityKind,
    entries: impl Iterator<Item = (&'a String, &'a String)>,
) -> Result<(), LoadError> {
    let mut seen = AHashSet::new();
    for (id, name) in entries {
        if id.trim().is_empty() {
            return Err(LoadError::EmptyId {
                kind,
                name: name.clone(),
            });
        }
        if !seen.insert(id.as_str()) {
            return Err(LoadError::DuplicateId {
                kind,
                id: id.clone(),
            });
        }
    }
    Ok(())
}
