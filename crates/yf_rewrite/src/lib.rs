//! Marker Rewriter.
//!
//! Two operations over a parsed routine:
//! - generator flagging: mark the top-level function literal as a generator
//!   (the spine program → first statement → expression is known statically)
//! - marker substitution: a full traversal replacing suspension and
//!   delegation markers with genuine `yield` / `yield*` nodes, re-visiting
//!   the substituted node's new children so nested markers are found.

use swc_ecma_visit::VisitMutWith;
use thiserror::Error;
use yf_marker::{MarkerSyntax, Script};

mod flag;
mod visitor;

pub use flag::flag_generator;
pub use visitor::MarkerRewriter;

/// A routine tree that lost the shape the parser validated. Unreachable
/// through the public pipeline; kept as a defect signal for direct callers.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("routine program has no top-level function literal to flag")]
    MalformedSpine,
}

/// Flag the routine as a generator and substitute all markers.
///
/// Returns the number of markers rewritten (zero is fine: a routine without
/// suspension points becomes a generator that completes on its first step).
pub fn rewrite_routine(
    script: &mut Script,
    syntax: &MarkerSyntax,
) -> Result<usize, RewriteError> {
    flag::flag_generator(script)?;

    let mut rewriter = MarkerRewriter::new(syntax.clone());
    script.visit_mut_with(&mut rewriter);

    tracing::debug!(markers = rewriter.rewritten(), "substituted markers");
    Ok(rewriter.rewritten())
}
