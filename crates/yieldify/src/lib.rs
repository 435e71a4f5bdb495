//! yieldify — desugar pseudo-yield routines into real generators.
//!
//! A routine written with the marker notation (`this.yield(v)` or
//! `yield(v)` to suspend, `this.yield * g` or `yield * g` to delegate) is
//! rewritten so the markers become genuine `yield` / `yield*` suspension
//! points, then materialized in an embedded ECMAScript engine as a callable
//! factory. Each factory call starts one independent generator instance
//! exposing the pull protocol (`next`, `throw`).
//!
//! ```
//! use yieldify::GeneratorBuilder;
//!
//! let mut builder = GeneratorBuilder::new();
//! let range = builder
//!     .build("function (from, to) { var n = from; while (n <= to) { this.yield(n); n++; } }")
//!     .unwrap();
//!
//! let task = range.invoke(builder.engine_mut(), &[0.into(), 2.into()]).unwrap();
//! let mut seen = Vec::new();
//! loop {
//!     let step = task.next(builder.engine_mut(), None).unwrap();
//!     if step.done {
//!         break;
//!     }
//!     seen.push(step.value.as_number().unwrap());
//! }
//! assert_eq!(seen, vec![0.0, 1.0, 2.0]);
//! ```

mod error;

pub use boa_engine::JsValue;
pub use error::Error;
pub use yf_marker::MarkerSyntax;
pub use yf_runtime::{Engine, GeneratorFactory, GeneratorInstance, RuntimeError, Step};

/// Composes the pipeline: extract → parse → rewrite → print → materialize →
/// wrap. The pipeline runs once per routine, at build time; the produced
/// factory is pure with respect to it.
pub struct GeneratorBuilder {
    engine: Engine,
    syntax: MarkerSyntax,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self::with_syntax(MarkerSyntax::default())
    }

    /// A builder recognizing only the given marker spellings.
    pub fn with_syntax(syntax: MarkerSyntax) -> Self {
        Self {
            engine: Engine::new(),
            syntax,
        }
    }

    /// The engine the factories built here live in. Stepping an instance and
    /// binding globals both go through it.
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Build a generator factory from a routine's source text.
    ///
    /// Fails with [`Error::InvalidArgument`] when the input is not a
    /// function literal, and with [`Error::Pipeline`] on any defect in
    /// rewriting, printing, or materialization.
    pub fn build(&mut self, routine: &str) -> Result<GeneratorFactory, Error> {
        let wrapped = yf_parser::extract_source(routine)?;
        let mut parsed = yf_parser::parse_routine(&wrapped)?;
        let markers = yf_rewrite::rewrite_routine(&mut parsed.script, &self.syntax)?;
        tracing::debug!(markers, "routine rewritten");

        let printed = yf_runtime::print_script(&parsed.script, parsed.source_map.clone())?;
        let function = yf_runtime::materialize(&mut self.engine, &printed)?;
        let factory = GeneratorFactory::wrap(&mut self.engine, function)?;
        Ok(factory)
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
