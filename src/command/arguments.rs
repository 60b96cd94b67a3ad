//! Argument classification and schema validation
//!
//! Tokens coming out of the quote resolver are split into named
//! (`key:value`) and positional arguments. Commands then attach their
//! schema with [`ParsedArguments::with_schema`], which produces a
//! [`ValidatedArguments`] carrying any unknown named keys.

use crate::command::definition::{self, ArgumentDefinition};
use crate::command::matching::fold;
use crate::command::tokenizer::resolve_quoted_tokens;
use ahash::AHashMap;
use serde::Serialize;
use std::ops::Deref;

/// A `key:value` argument as the user typed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedArgument {
    pub key: String,
    pub value: String,
}

/// Classified console arguments, immutable once built
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedArguments {
    named: Vec<NamedArgument>,
    /// Folded key -> index into `named`
    #[serde(skip)]
    index: AHashMap<String, usize>,
    positional: Vec<String>,
    all: Vec<String>,
}

impl ParsedArguments {
    /// Resolve single quotes in raw host tokens, then classify them
    pub fn parse<S: AsRef<str>>(raw_tokens: &[S]) -> Self {
        Self::from_resolved(resolve_quoted_tokens(raw_tokens))
    }

    /// Classify tokens that have already been through quote resolution
    pub fn from_resolved(tokens: Vec<String>) -> Self {
        let mut args = Self::default();

        for token in &tokens {
            match classify(token) {
                Some((key, value)) => args.insert_named(key, value),
                None => args.positional.push(token.clone()),
            }
        }

        args.all = tokens;
        args
    }

    // Duplicate keys keep their first position but take the last value.
    fn insert_named(&mut self, key: &str, value: &str) {
        let entry = NamedArgument {
            key: key.to_string(),
            value: value.to_string(),
        };
        match self.index.get(&fold(key)) {
            Some(&i) => self.named[i] = entry,
            None => {
                self.index.insert(fold(key), self.named.len());
                self.named.push(entry);
            }
        }
    }

    pub fn get_named(&self, name: &str) -> Option<&str> {
        self.index
            .get(&fold(name))
            .map(|&i| self.named[i].value.as_str())
    }

    pub fn has_named(&self, name: &str) -> bool {
        self.index.contains_key(&fold(name))
    }

    pub fn get_positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Named lookup first, positional fallback second
    ///
    /// Lets one command accept both `rename foo bar` and
    /// `rename settlement:foo name:bar`.
    pub fn get_argument(&self, name: &str, positional_index: usize) -> Option<&str> {
        self.get_named(name)
            .or_else(|| self.get_positional(positional_index))
    }

    pub fn get_int(&self, name: &str, positional_index: usize, default: i64) -> i64 {
        self.get_argument(name, positional_index)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    pub fn get_float(&self, name: &str, positional_index: usize, default: f64) -> f64 {
        self.get_argument(name, positional_index)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    pub fn get_bool(&self, name: &str, positional_index: usize, default: bool) -> bool {
        self.get_argument(name, positional_index)
            .and_then(parse_bool)
            .unwrap_or(default)
    }

    pub fn named(&self) -> &[NamedArgument] {
        &self.named
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Every argument in post-tokenization order, for display and logging
    pub fn all(&self) -> &[String] {
        &self.all
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Attach a command schema and compute unknown named keys
    pub fn with_schema(self, definitions: Vec<ArgumentDefinition>) -> ValidatedArguments {
        let unknown_named = self
            .named
            .iter()
            .filter(|arg| !definitions.iter().any(|def| def.accepts(&arg.key)))
            .map(|arg| arg.key.clone())
            .collect();

        ValidatedArguments {
            args: self,
            definitions,
            unknown_named,
        }
    }
}

/// Split a token into `(key, value)` if it is a named argument
///
/// The first colon decides: it must not be the first character and the
/// text before it must not contain a space.
fn classify(token: &str) -> Option<(&str, &str)> {
    let colon = token.find(':')?;
    let key = &token[..colon];
    if colon == 0 || key.contains(' ') {
        return None;
    }
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, &token[colon + 1..]))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Parsed arguments with a command schema attached
#[derive(Debug, Clone)]
pub struct ValidatedArguments {
    args: ParsedArguments,
    definitions: Vec<ArgumentDefinition>,
    unknown_named: Vec<String>,
}

impl Deref for ValidatedArguments {
    type Target = ParsedArguments;

    fn deref(&self) -> &ParsedArguments {
        &self.args
    }
}

impl ValidatedArguments {
    pub fn definitions(&self) -> &[ArgumentDefinition] {
        &self.definitions
    }

    /// Named keys that match no definition name or alias
    pub fn unknown_named(&self) -> &[String] {
        &self.unknown_named
    }

    pub fn is_valid(&self) -> bool {
        self.unknown_named.is_empty()
    }

    /// `None` when every named key is known
    pub fn validation_error(&self) -> Option<String> {
        if self.unknown_named.is_empty() {
            return None;
        }
        Some(format!(
            "Unknown argument(s): {}. Valid arguments: {}",
            self.unknown_named.join(", "),
            definition::vocabulary(&self.definitions)
        ))
    }

    /// Value for a declared argument by name, any alias, or declaration position
    pub fn value_of(&self, name: &str) -> Option<&str> {
        let position = self.definitions.iter().position(|d| d.accepts(name))?;
        let def = &self.definitions[position];

        std::iter::once(&def.name)
            .chain(def.aliases.iter())
            .find_map(|key| self.args.get_named(key))
            .or_else(|| self.args.get_positional(position))
    }

    /// Required definitions with no value by name, alias or position
    pub fn missing_required(&self) -> Vec<&ArgumentDefinition> {
        self.definitions
            .iter()
            .filter(|def| def.required && self.value_of(&def.name).is_none())
            .collect()
    }

    pub fn usage(&self, command_name: &str) -> String {
        definition::usage_line(command_name, &self.definitions)
    }

    pub fn format_argument_display(
        &self,
        command_name: &str,
        resolved: &AHashMap<String, String>,
    ) -> String {
        definition::format_argument_display(command_name, &self.definitions, resolved)
    }

    pub fn into_arguments(self) -> ParsedArguments {
        self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[&str]) -> ParsedArguments {
        ParsedArguments::parse(tokens)
    }

    #[test]
    fn test_named_value() {
        let args = parse(&["count:5"]);
        assert_eq!(args.get_named("count"), Some("5"));
        assert!(args.positional().is_empty());
    }

    #[test]
    fn test_space_before_colon_is_positional() {
        let args = ParsedArguments::from_resolved(vec!["foo bar:5".to_string()]);
        assert!(args.named().is_empty());
        assert_eq!(args.positional(), ["foo bar:5"]);
    }

    #[test]
    fn test_leading_colon_is_positional() {
        let args = parse(&[":5"]);
        assert!(args.named().is_empty());
        assert_eq!(args.get_positional(0), Some(":5"));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let args = parse(&["name:"]);
        assert_eq!(args.get_named("name"), Some(""));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let args = parse(&["time:12:30"]);
        assert_eq!(args.get_named("time"), Some("12:30"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let args = parse(&["Hero:derthert"]);
        assert_eq!(args.get_named("hero"), Some("derthert"));
        assert_eq!(args.get_named("HERO"), Some("derthert"));
        assert!(args.has_named("hEro"));
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let args = parse(&["count:1", "x", "COUNT:2"]);
        assert_eq!(args.get_named("count"), Some("2"));
        assert_eq!(args.named().len(), 1);
        assert_eq!(args.named()[0].key, "COUNT");
        assert_eq!(args.all(), ["count:1", "x", "COUNT:2"]);
    }

    #[test]
    fn test_all_keeps_order_of_named_and_positional() {
        let args = parse(&["a", "k:'v", "w'", "b"]);
        assert_eq!(args.all(), ["a", "k:v w", "b"]);
        assert_eq!(args.positional(), ["a", "b"]);
        assert_eq!(args.get_named("k"), Some("v w"));
    }

    #[test]
    fn test_get_argument_named_then_positional() {
        let args = parse(&["foo", "name:bar"]);
        assert_eq!(args.get_argument("name", 1), Some("bar"));
        assert_eq!(args.get_argument("settlement", 0), Some("foo"));
        assert_eq!(args.get_argument("settlement", 3), None);

        let positional = parse(&["foo", "bar"]);
        assert_eq!(positional.get_argument("name", 1), Some("bar"));
    }

    #[test]
    fn test_typed_getters_parse_or_default() {
        let args = parse(&["count:7", "ratio:0.5", "bad:x", "12"]);
        assert_eq!(args.get_int("count", 99, 0), 7);
        assert_eq!(args.get_int("bad", 99, -1), -1);
        assert_eq!(args.get_int("missing", 0, -1), 12);
        assert!((args.get_float("ratio", 99, 0.0) - 0.5).abs() < f64::EPSILON);
        assert!((args.get_float("bad", 99, 2.5) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bool_getter_accepts_word_forms() {
        let args = parse(&["a:yes", "b:OFF", "c:1", "d:false", "e:maybe"]);
        assert!(args.get_bool("a", 99, false));
        assert!(!args.get_bool("b", 99, true));
        assert!(args.get_bool("c", 99, false));
        assert!(!args.get_bool("d", 99, true));
        assert!(args.get_bool("e", 99, true));
        assert!(!args.get_bool("missing", 99, false));
    }

    #[test]
    fn test_alias_is_known() {
        let schema = vec![ArgumentDefinition::required("x").with_alias("y")];
        let validated = parse(&["y:1"]).with_schema(schema);
        assert!(validated.unknown_named().is_empty());
        assert!(validated.validation_error().is_none());
    }

    #[test]
    fn test_unknown_key_reported() {
        let schema = vec![ArgumentDefinition::required("x").with_alias("y")];
        let validated = parse(&["z:1"]).with_schema(schema);
        assert_eq!(validated.unknown_named(), ["z"]);

        let message = validated.validation_error().unwrap();
        assert!(message.contains("z"));
        assert!(message.contains("x (aliases: y)"));
    }

    #[test]
    fn test_positional_tokens_never_unknown() {
        let schema = vec![ArgumentDefinition::required("x")];
        let validated = parse(&["free", "text"]).with_schema(schema);
        assert!(validated.is_valid());
    }

    #[test]
    fn test_value_of_uses_alias_and_position() {
        let schema = vec![
            ArgumentDefinition::required("settlement").with_alias("town"),
            ArgumentDefinition::required("name"),
        ];
        let by_alias = parse(&["town:pravend", "name:'New", "Pravend'"]).with_schema(schema.clone());
        assert_eq!(by_alias.value_of("settlement"), Some("pravend"));
        assert_eq!(by_alias.value_of("name"), Some("New Pravend"));

        let by_position = parse(&["pravend", "Newtown"]).with_schema(schema);
        assert_eq!(by_position.value_of("town"), Some("pravend"));
        assert_eq!(by_position.value_of("name"), Some("Newtown"));
        assert_eq!(by_position.value_of("unknown"), None);
    }

    #[test]
    fn test_missing_required() {
        let schema = vec![
            ArgumentDefinition::required("hero"),
            ArgumentDefinition::required("amount"),
            ArgumentDefinition::optional("reason"),
        ];
        let validated = parse(&["hero:derthert"]).with_schema(schema);
        let missing: Vec<&str> = validated
            .missing_required()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(missing, ["amount"]);
    }
}
