//! Generator runtime for yieldify.
//!
//! The back half of the pipeline: serialize the rewritten routine back to
//! source text, evaluate it inside an embedded ECMAScript engine to obtain a
//! callable factory, tag the factory, and drive instances through the
//! `next`/`throw` step protocol.
//!
//! Lowering to a resumable state machine is the engine's job: the printed
//! routine is a genuine `function*`, which the engine compiles to its own
//! suspendable bytecode. The [`Engine`] value is the runtime-support
//! dependency every stage takes explicitly; nothing is ambient.

use thiserror::Error;

mod emit;
mod engine;
mod factory;
mod materialize;

pub use emit::print_script;
pub use engine::Engine;
pub use factory::{GeneratorFactory, GeneratorInstance, Step};
pub use materialize::materialize;

/// Failures in the runtime half of the pipeline.
///
/// `Print`, `Materialize`, and `Protocol` are pipeline defects: a malformed
/// lowered program or a value that does not honor the generator protocol.
/// `Routine` is an error thrown by user code (or injected and not caught);
/// it propagates out of the step call. `Eval` covers bootstrap evaluation
/// done through [`Engine::eval`].
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to print rewritten routine: {0}")]
    Print(String),
    #[error("failed to materialize generator factory: {0}")]
    Materialize(String),
    #[error("engine evaluation failed: {0}")]
    Eval(String),
    #[error("generator routine threw: {0}")]
    Routine(String),
    #[error("malformed generator protocol value: {0}")]
    Protocol(String),
}
