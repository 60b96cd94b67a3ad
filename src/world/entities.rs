//! Roster entity types as read from roster files
//!
//! These are read-only views of campaign entities. Their only job here is
//! to be found: each one is a [`Candidate`] with a stable id and a name.

use crate::command::resolver::Candidate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named character
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Hero {
    /// Unique identifier (e.g., "lord_1_1")
    pub id: String,
    /// Display name
    pub name: String,
    /// Id of the clan this hero belongs to
    #[serde(default)]
    pub clan: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    /// Dead heroes stay searchable so that history commands can find them
    #[serde(default = "default_alive")]
    pub alive: bool,
}

fn default_alive() -> bool {
    true
}

/// A noble house or minor faction
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Clan {
    pub id: String,
    pub name: String,
    /// Renown tier, 0 to 6
    #[serde(default)]
    pub tier: u8,
    /// Hero id of the clan leader
    #[serde(default)]
    pub leader: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementKind {
    Town,
    Castle,
    Village,
}

impl fmt::Display for SettlementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SettlementKind::Town => "town",
            SettlementKind::Castle => "castle",
            SettlementKind::Village => "village",
        };
        f.write_str(label)
    }
}

/// A town, castle or village on the campaign map
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settlement {
    pub id: String,
    pub name: String,
    pub kind: SettlementKind,
    /// Id of the owning clan
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub prosperity: Option<f32>,
}

impl Candidate for Hero {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Candidate for Clan {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Candidate for Settlement {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (id: {})", self.name, self.id)?;
        writeln!(f, "  clan: {}", self.clan.as_deref().unwrap_or("none"))?;
        if let Some(age) = self.age {
            writeln!(f, "  age: {}", age)?;
        }
        write!(f, "  status: {}", if self.alive { "alive" } else { "dead" })
    }
}

impl fmt::Display for Clan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (id: {})", self.name, self.id)?;
        writeln!(f, "  tier: {}", self.tier)?;
        write!(f, "  leader: {}", self.leader.as_deref().unwrap_or("none"))
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (id: {})", self.name, self.id)?;
        writeln!(f, "  kind: {}", self.kind)?;
        write!(f, "  owner: {}", self.owner.as_deref().unwrap_or("none"))?;
        if let Some(prosperity) = self.prosperity {
            write!(f, "\n  prosperity: {:.0}", prosperity)?;
        }
        Ok(())
    }
}
