//! Routine frontend for yieldify.
//!
//! Recovers the canonical parenthesized form of a routine's source text,
//! parses it as a sloppy-mode ECMAScript script (so the bare identifier
//! `yield` is legal inside a non-generator function), and validates that the
//! result is exactly one expression statement wrapping a function literal.

use thiserror::Error;

mod extract;
mod parse;

pub use extract::extract_source;
pub use parse::{parse_routine, ParsedRoutine};

/// Why an input could not be accepted as a routine.
///
/// Every variant means the argument does not denote a callable function
/// literal; the pipeline surfaces all of them as `InvalidArgument`.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Blank input: there is no source text to recover.
    #[error("no source text to parse")]
    NotCallable,
    /// The wrapped source did not parse as a script.
    #[error("routine source did not parse: {0}")]
    Syntax(String),
    /// The source parsed, but the top-level expression is not a function
    /// literal. Arrow functions are rejected: they cannot be generators.
    #[error("routine must be a function literal, not {0}")]
    NotFunctionLiteral(&'static str),
}
