//! Source Extractor.
//!
//! Wraps the routine source in parentheses so that parsing always yields a
//! single top-level expression statement containing a function literal.
//! This normalizes declaration-style (`function f() {}`) and
//! expression-style routines to one shape.

use crate::ParseError;

/// Recover the canonical parenthesized form `(<source>)` of a routine.
///
/// Blank input fails with [`ParseError::NotCallable`] before any parsing is
/// attempted. Pure function of the input text.
pub fn extract_source(routine: &str) -> Result<String, ParseError> {
    let trimmed = routine.trim();
    if trimmed.is_empty() {
        return Err(ParseError::NotCallable);
    }
    Ok(format!("({trimmed})"))
}
