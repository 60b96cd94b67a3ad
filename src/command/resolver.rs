//! Candidate resolution - narrows a loose search result to one entity
//!
//! Domain searches match a query anywhere in an entity's id or name, so a
//! short query often returns several hits. The cascade below imposes a
//! fixed order of preference:
//!
//! 1. exact name
//! 2. name prefix (only when nothing else matches at all)
//! 3. exact id
//! 4. id prefix
//! 5. shortest id
//! 6. name-only matches (always ambiguous)
//!
//! The first tier with exactly one winner resolves the query. A tier with
//! several equally good winners stops the cascade with an error that lists
//! them, so the user can retype a more specific query.

use crate::command::matching::FoldedQuery;
use thiserror::Error;
use tracing::debug;

/// An entity that can be picked out by id or name
pub trait Candidate {
    /// Stable unique identifier
    fn id(&self) -> &str;
    /// Display name
    fn name(&self) -> &str;
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Why a query could not be narrowed to one candidate
///
/// Every ambiguity carries the competing candidates already rendered by the
/// caller's formatter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("No match found for '{query}'")]
    NoMatch { query: String },

    #[error("Found multiple names exactly matching '{query}'. Please use an id instead:\n{listing}")]
    AmbiguousExactName { query: String, listing: String },

    #[error("Found multiple names starting with '{query}'. Please be more specific or use an id:\n{listing}")]
    AmbiguousNamePrefix { query: String, listing: String },

    #[error("A name starts with '{query}' but other entities also contain it. Please be more specific or use an id:\n{listing}")]
    AmbiguousBroaderSubstring { query: String, listing: String },

    #[error("Found multiple ids starting with '{query}'. Please be more specific:\n{listing}")]
    AmbiguousIdPrefix { query: String, listing: String },

    #[error("Found multiple ids containing '{query}' with the same length and cannot be automatically selected:\n{listing}")]
    AmbiguousSameLengthId { query: String, listing: String },

    #[error("Found multiple names containing '{query}', please be more specific:\n{listing}")]
    AmbiguousNameOnly { query: String, listing: String },

    #[error("Found multiple matches for '{query}':\n{listing}")]
    Unresolved { query: String, listing: String },
}

impl ResolutionError {
    pub fn query(&self) -> &str {
        match self {
            ResolutionError::NoMatch { query }
            | ResolutionError::AmbiguousExactName { query, .. }
            | ResolutionError::AmbiguousNamePrefix { query, .. }
            | ResolutionError::AmbiguousBroaderSubstring { query, .. }
            | ResolutionError::AmbiguousIdPrefix { query, .. }
            | ResolutionError::AmbiguousSameLengthId { query, .. }
            | ResolutionError::AmbiguousNameOnly { query, .. }
            | ResolutionError::Unresolved { query, .. } => query,
        }
    }

    /// Rendered competing candidates, absent for `NoMatch`
    pub fn listing(&self) -> Option<&str> {
        match self {
            ResolutionError::NoMatch { .. } => None,
            ResolutionError::AmbiguousExactName { listing, .. }
            | ResolutionError::AmbiguousNamePrefix { listing, .. }
            | ResolutionError::AmbiguousBroaderSubstring { listing, .. }
            | ResolutionError::AmbiguousIdPrefix { listing, .. }
            | ResolutionError::AmbiguousSameLengthId { listing, .. }
            | ResolutionError::AmbiguousNameOnly { listing, .. }
            | ResolutionError::Unresolved { listing, .. } => Some(listing),
        }
    }

    pub fn is_ambiguity(&self) -> bool {
        !matches!(self, ResolutionError::NoMatch { .. })
    }
}

/// Success carries a borrow of the chosen candidate, so it can never be empty
pub type ResolutionResult<T> = std::result::Result<T, ResolutionError>;

/// Pick exactly one of several search hits for `query`
///
/// Callers normally handle the zero- and one-hit cases themselves (see
/// [`select_single`]); this is the cascade for two or more hits.
pub fn resolve_multiple_matches<'a, T, I, N, F>(
    candidates: &'a [T],
    query: &str,
    id_of: I,
    name_of: N,
    format: F,
) -> ResolutionResult<&'a T>
where
    I: Fn(&T) -> &str,
    N: Fn(&T) -> &str,
    F: Fn(&[&T]) -> String,
{
    let q = FoldedQuery::new(query);

    let mut id_matches: Vec<&T> = Vec::new();
    let mut name_matches: Vec<&T> = Vec::new();
    let mut all_matches: Vec<&T> = Vec::new();

    for candidate in candidates {
        if q.is_contained_in(id_of(candidate)) {
            id_matches.push(candidate);
            all_matches.push(candidate);
        } else if q.is_contained_in(name_of(candidate)) {
            name_matches.push(candidate);
            all_matches.push(candidate);
        }
    }

    debug!(
        "Resolving '{}' among {} candidates ({} by id, {} by name only)",
        query,
        candidates.len(),
        id_matches.len(),
        name_matches.len()
    );

    // Exact name
    let exact_names = filter(&all_matches, |c| q.equals(name_of(c)));
    match exact_names.len() {
        0 => {}
        1 => {
            debug!("'{}' resolved by exact name", query);
            return Ok(exact_names[0]);
        }
        _ => {
            return Err(ResolutionError::AmbiguousExactName {
                query: query.to_string(),
                listing: format(&exact_names),
            })
        }
    }

    // Name prefix, only trusted when it is the sole match of any kind
    let name_prefixes = filter(&all_matches, |c| q.is_prefix_of(name_of(c)));
    match name_prefixes.len() {
        0 => {}
        1 if all_matches.len() == 1 => {
            debug!("'{}' resolved by name prefix", query);
            return Ok(name_prefixes[0]);
        }
        1 => {
            return Err(ResolutionError::AmbiguousBroaderSubstring {
                query: query.to_string(),
                listing: format(&all_matches),
            })
        }
        _ => {
            return Err(ResolutionError::AmbiguousNamePrefix {
                query: query.to_string(),
                listing: format(&all_matches),
            })
        }
    }

    // Exact id; ids are unique so the first hit wins
    if let Some(&exact_id) = id_matches.iter().find(|c| q.equals(id_of(**c))) {
        debug!("'{}' resolved by exact id", query);
        return Ok(exact_id);
    }

    // Id prefix
    let id_prefixes = filter(&all_matches, |c| q.is_prefix_of(id_of(c)));
    match id_prefixes.len() {
        0 => {}
        1 => {
            debug!("'{}' resolved by id prefix", query);
            return Ok(id_prefixes[0]);
        }
        _ => {
            return Err(ResolutionError::AmbiguousIdPrefix {
                query: query.to_string(),
                listing: format(&id_prefixes),
            })
        }
    }

    // Shortest id among id matches
    if let Some(min_len) = id_matches.iter().map(|c| id_of(*c).chars().count()).min() {
        let shortest = filter(&id_matches, |c| id_of(c).chars().count() == min_len);
        if shortest.len() == 1 {
            debug!("'{}' resolved by shortest id", query);
            return Ok(shortest[0]);
        }
        return Err(ResolutionError::AmbiguousSameLengthId {
            query: query.to_string(),
            listing: format(&shortest),
        });
    }

    if !name_matches.is_empty() {
        return Err(ResolutionError::AmbiguousNameOnly {
            query: query.to_string(),
            listing: format(&name_matches),
        });
    }

    let everything: Vec<&T> = candidates.iter().collect();
    Err(ResolutionError::Unresolved {
        query: query.to_string(),
        listing: format(&everything),
    })
}

fn filter<'a, T, P>(matches: &[&'a T], predicate: P) -> Vec<&'a T>
where
    P: Fn(&T) -> bool,
{
    matches.iter().copied().filter(|c| predicate(*c)).collect()
}

/// [`resolve_multiple_matches`] for types implementing [`Candidate`]
pub fn resolve_candidates<'a, T, F>(
    candidates: &'a [T],
    query: &str,
    format: F,
) -> ResolutionResult<&'a T>
where
    T: Candidate,
    F: Fn(&[&T]) -> String,
{
    resolve_multiple_matches(candidates, query, T::id, T::name, format)
}

/// Resolve a complete search result: no hits, one hit, or the cascade
pub fn select_single<'a, T, F>(hits: &'a [T], query: &str, format: F) -> ResolutionResult<&'a T>
where
    T: Candidate,
    F: Fn(&[&T]) -> String,
{
    match hits {
        [] => Err(ResolutionError::NoMatch {
            query: query.to_string(),
        }),
        [only] => Ok(only),
        _ => resolve_candidates(hits, query, format),
    }
}
