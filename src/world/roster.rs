//! In-memory roster with the loose substring search the console builds on

use crate::command::matching::FoldedQuery;
use crate::command::resolver::Candidate;
use crate::world::entities::{Clan, Hero, Settlement};

/// Every entity the console can look up
#[derive(Debug, Clone, Default)]
pub struct Roster {
    heroes: Vec<Hero>,
    clans: Vec<Clan>,
    settlements: Vec<Settlement>,
}

impl Roster {
    pub fn new(heroes: Vec<Hero>, clans: Vec<Clan>, settlements: Vec<Settlement>) -> Self {
        Self {
            heroes,
            clans,
            settlements,
        }
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn clans(&self) -> &[Clan] {
        &self.clans
    }

    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    pub fn search_heroes(&self, query: &str) -> Vec<&Hero> {
        search_by_id_or_name(&self.heroes, query)
    }

    pub fn search_clans(&self, query: &str) -> Vec<&Clan> {
        search_by_id_or_name(&self.clans, query)
    }

    pub fn search_settlements(&self, query: &str) -> Vec<&Settlement> {
        search_by_id_or_name(&self.settlements, query)
    }

    pub fn hero(&self, id: &str) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.id == id)
    }

    pub fn clan(&self, id: &str) -> Option<&Clan> {
        self.clans.iter().find(|c| c.id == id)
    }

    /// Total number of entities of all kinds
    pub fn len(&self) -> usize {
        self.heroes.len() + self.clans.len() + self.settlements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every item whose id or name contains `query`, ignoring case, in roster order
pub fn search_by_id_or_name<'a, T: Candidate>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let q = FoldedQuery::new(query);
    items
        .iter()
        .filter(|item| q.is_contained_in(item.id()) || q.is_contained_in(item.name()))
        .collect()
}
