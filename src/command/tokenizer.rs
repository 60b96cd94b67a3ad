//! Single-quote resolution for console tokens
//!
//! The host shell splits a line on whitespace and strips double quotes, but
//! leaves single quotes in place. This pass re-joins any run of tokens
//! wrapped in single quotes into one logical token:
//!
//! - `'Lord of` `Pravend'` becomes `Lord of Pravend`
//! - `name:'Old` `Mill'` becomes `name:Old Mill`
//!
//! An opening quote that is never closed consumes every remaining token.
//! This is lenient on purpose and never reported as an error.

use tracing::debug;

const QUOTE: char = '\'';

/// Re-join single-quoted runs of tokens
pub fn resolve_quoted_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut resolved = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_ref();

        if let Some((key, value)) = split_quoted_named(token) {
            let (joined, next) = join_quoted(value, tokens, i + 1);
            resolved.push(format!("{}:{}", key, joined));
            i = next;
        } else if let Some(value) = token.strip_prefix(QUOTE) {
            let (joined, next) = join_quoted(value, tokens, i + 1);
            resolved.push(joined);
            i = next;
        } else {
            resolved.push(token.to_string());
            i += 1;
        }
    }

    if resolved.len() != tokens.len() {
        debug!(
            "Resolved {} raw tokens into {} arguments",
            tokens.len(),
            resolved.len()
        );
    }

    resolved
}

/// Split `key:'value` into `("key", "value")` with the opening quote removed
fn split_quoted_named(token: &str) -> Option<(&str, &str)> {
    let colon = token.find(':')?;
    if colon == 0 {
        return None;
    }
    let value = token[colon + 1..].strip_prefix(QUOTE)?;
    Some((&token[..colon], value))
}

/// Join `first` with following tokens until one closes the quote
///
/// `first` has already had its opening quote removed. Returns the joined
/// value and the index of the first token not consumed.
fn join_quoted<S: AsRef<str>>(first: &str, tokens: &[S], start: usize) -> (String, usize) {
    if let Some(inner) = first.strip_suffix(QUOTE) {
        return (inner.to_string(), start);
    }

    let mut parts = vec![first.to_string()];
    let mut next = start;

    while next < tokens.len() {
        let token = tokens[next].as_ref();
        next += 1;
        if let Some(last) = token.strip_suffix(QUOTE) {
            parts.push(last.to_string());
            return (parts.join(" "), next);
        }
        parts.push(token.to_string());
    }

    debug!("Unclosed single quote consumed {} trailing tokens", next - start);
    (parts.join(" "), next)
}
