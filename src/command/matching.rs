//! Case-insensitive string comparisons shared by every resolution tier
//!
//! All comparisons fold both sides with `str::to_lowercase` so that the
//! tiers agree on what "equal", "starts with" and "contains" mean.

/// Fold a string for comparison
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Full-string equality ignoring case
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}

/// A query folded once, for comparing against many candidates
#[derive(Debug, Clone)]
pub struct FoldedQuery {
    folded: String,
}

impl FoldedQuery {
    pub fn new(query: &str) -> Self {
        Self {
            folded: fold(query),
        }
    }

    pub fn equals(&self, value: &str) -> bool {
        fold(value) == self.folded
    }

    pub fn is_prefix_of(&self, value: &str) -> bool {
        fold(value).starts_with(&self.folded)
    }

    pub fn is_contained_in(&self, value: &str) -> bool {
        fold(value).contains(&self.folded)
    }
}
