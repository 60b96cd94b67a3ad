//! Named-argument schema declared by each console command

use crate::command::matching::eq_ignore_case;
use ahash::AHashMap;
use std::collections::BTreeSet;

const NOT_SPECIFIED: &str = "Not specified";

/// One accepted named argument of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDefinition {
    pub name: String,
    pub required: bool,
    /// Shown by the argument display when the caller resolved no value
    pub default_display: Option<String>,
    pub aliases: BTreeSet<String>,
}

impl ArgumentDefinition {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            default_display: None,
            aliases: BTreeSet::new(),
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name)
        }
    }

    pub fn with_default(mut self, display: impl Into<String>) -> Self {
        self.default_display = Some(display.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.insert(alias.into());
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Whether `key` names this argument, by name or alias, ignoring case
    pub fn accepts(&self, key: &str) -> bool {
        eq_ignore_case(&self.name, key) || self.aliases.iter().any(|a| eq_ignore_case(a, key))
    }

    /// `name` or `name (aliases: a, b)`
    pub fn vocabulary_entry(&self) -> String {
        if self.aliases.is_empty() {
            self.name.clone()
        } else {
            let aliases: Vec<&str> = self.aliases.iter().map(String::as_str).collect();
            format!("{} (aliases: {})", self.name, aliases.join(", "))
        }
    }

    fn usage_token(&self) -> String {
        if self.required {
            format!("<{}>", self.name)
        } else {
            format!("[{}]", self.name)
        }
    }
}

/// `Usage: command <required> [optional]`
pub fn usage_line(command_name: &str, definitions: &[ArgumentDefinition]) -> String {
    let mut line = format!("Usage: {}", command_name);
    for def in definitions {
        line.push(' ');
        line.push_str(&def.usage_token());
    }
    line
}

/// Comma-separated list of every accepted key, aliases included
pub fn vocabulary(definitions: &[ArgumentDefinition]) -> String {
    definitions
        .iter()
        .map(ArgumentDefinition::vocabulary_entry)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per definition, in declaration order
///
/// Required arguments render as `<name: value>`, optional ones as
/// `[name: value]`. The value is taken from `resolved`, then from the
/// definition's default display, then falls back to "Not specified".
pub fn format_argument_display(
    command_name: &str,
    definitions: &[ArgumentDefinition],
    resolved: &AHashMap<String, String>,
) -> String {
    let mut out = format!("{} arguments:", command_name);
    for def in definitions {
        let value = resolved
            .get(&def.name)
            .map(String::as_str)
            .or(def.default_display.as_deref())
            .unwrap_or(NOT_SPECIFIED);
        let line = if def.required {
            format!("<{}: {}>", def.name, value)
        } else {
            format!("[{}: {}]", def.name, value)
        };
        out.push_str("\n  ");
        out.push_str(&line);
    }
    out
}
