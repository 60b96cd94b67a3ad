//! Campaign roster: the entities console commands look up

pub mod entities;
pub mod loader;
pub mod roster;

pub use entities::{Clan, Hero, Settlement, SettlementKind};
pub use loader::LoadError;
pub use roster::{search_by_id_or_name, Roster};
