//! Console command input pipeline
//!
//! raw host tokens -> quote resolution -> ParsedArguments -> schema
//! validation -> domain search -> candidate resolution

pub mod arguments;
pub mod definition;
pub mod format;
pub mod matching;
pub mod resolver;
pub mod tokenizer;

pub use arguments::{NamedArgument, ParsedArguments, ValidatedArguments};
pub use definition::{format_argument_display, usage_line, ArgumentDefinition};
pub use format::format_candidates;
pub use resolver::{
    resolve_candidates, resolve_multiple_matches, select_single, Candidate, ResolutionError,
    ResolutionResult,
};
pub use tokenizer::resolve_quoted_tokens;
