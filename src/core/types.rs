//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of entity the console can look up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Hero,
    Clan,
    Settlement,
}

impl EntityKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Hero => "hero",
            EntityKind::Clan => "clan",
            EntityKind::Settlement => "settlement",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Hero => "heroes",
            EntityKind::Clan => "clans",
            EntityKind::Settlement => "settlements",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hero" | "heroes" => Ok(EntityKind::Hero),
            "clan" | "clans" => Ok(EntityKind::Clan),
            "settlement" | "settlements" | "town" | "castle" | "village" => {
                Ok(EntityKind::Settlement)
            }
            other => Err(format!(
                "Unknown entity kind '{}'. Expected one of: hero, clan, settlement",
                other
            )),
        }
    }
}
