//! Error taxonomy of the whole pipeline.

use thiserror::Error;
use yf_parser::ParseError;
use yf_rewrite::RewriteError;
use yf_runtime::RuntimeError;

/// Why building or running a generator failed.
///
/// No stage retries: an invalid argument or a pipeline defect always fails
/// fast and visibly.
#[derive(Debug, Error)]
pub enum Error {
    /// The input to the factory builder does not denote a callable function
    /// literal. Raised before any rewriting happens.
    #[error("argument must be a function: {0}")]
    InvalidArgument(#[from] ParseError),

    /// A defect inside rewriting, printing, or materialization. Fatal to the
    /// build attempt; carries the underlying cause.
    #[error("generator pipeline failed: {0}")]
    Pipeline(String),

    /// An error thrown by user code inside the routine while stepping.
    #[error("generator routine threw: {0}")]
    Routine(String),
}

impl From<RewriteError> for Error {
    fn from(e: RewriteError) -> Self {
        Error::Pipeline(e.to_string())
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        match e {
            RuntimeError::Routine(message) => Error::Routine(message),
            other => Error::Pipeline(other.to_string()),
        }
    }
}
