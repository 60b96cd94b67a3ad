//! Human-readable candidate listings for ambiguity messages

use crate::command::resolver::Candidate;

/// One line per candidate, `  - Name (id: some_id)`
///
/// At most `limit` candidates are listed; the rest are summarised in a
/// trailing `... and N more` line.
pub fn format_candidates<C: Candidate>(candidates: &[C], limit: usize) -> String {
    let mut lines: Vec<String> = candidates
        .iter()
        .take(limit)
        .map(|c| format!("  - {} (id: {})", c.name(), c.id()))
        .collect();

    if candidates.len() > limit {
        lines.push(format!("  ... and {} more", candidates.len() - limit));
    }

    lines.join("\n")
}
