//! The embedded ECMAScript engine, passed explicitly through the pipeline.

use boa_engine::property::Attribute;
use boa_engine::{Context, JsError, JsString, JsValue, Source};

use crate::RuntimeError;

/// Owns the `boa_engine` context every materialized factory lives in.
///
/// `boa_engine::Context` is `!Send + !Sync`, so an `Engine` is confined to
/// the thread that created it. All routines built against one `Engine` share
/// its global scope, which is what lets a routine delegate to a factory
/// bound there.
pub struct Engine {
    context: Context,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            context: Context::default(),
        }
    }

    /// Evaluate a snippet in the engine's global scope.
    ///
    /// Intended for test setup and for seeding globals a routine closes
    /// over; the pipeline itself goes through [`crate::materialize`].
    pub fn eval(&mut self, code: &str) -> Result<JsValue, RuntimeError> {
        let context = &mut self.context;
        context
            .eval(Source::from_bytes(code))
            .map_err(|e| RuntimeError::Eval(js_error_message(&e, context)))
    }

    /// Render a value through its engine string conversion.
    pub fn stringify(&mut self, value: &JsValue) -> Result<String, RuntimeError> {
        let context = &mut self.context;
        value
            .to_string(context)
            .map(|s| s.to_std_string_escaped())
            .map_err(|e| RuntimeError::Eval(js_error_message(&e, context)))
    }

    /// Bind a value as a global property, e.g. a generator factory another
    /// routine delegates to.
    pub fn bind_global(&mut self, name: &str, value: JsValue) -> Result<(), RuntimeError> {
        self.context
            .register_global_property(JsString::from(name), value, Attribute::all())
            .map_err(|e| {
                let context = &mut self.context;
                RuntimeError::Eval(js_error_message(&e, context))
            })
    }

    pub(crate) fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Render an engine error as text, falling back when the thrown value has no
/// usable string conversion.
pub(crate) fn js_error_message(error: &JsError, context: &mut Context) -> String {
    error
        .to_opaque(context)
        .to_string(context)
        .map(|s| s.to_std_string_escaped())
        .unwrap_or_else(|_| "unknown engine error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_returns_completion_value() {
        let mut engine = Engine::new();
        let value = engine.eval("1 + 2").unwrap();
        assert_eq!(value.as_number(), Some(3.0));
    }

    #[test]
    fn eval_surfaces_thrown_errors() {
        let mut engine = Engine::new();
        let err = engine.eval("throw new Error('Boom')").unwrap_err();
        assert!(err.to_string().contains("Boom"));
    }

    #[test]
    fn bound_globals_are_visible_to_later_evaluations() {
        let mut engine = Engine::new();
        engine.bind_global("answer", JsValue::from(42)).unwrap();
        let value = engine.eval("answer + 1").unwrap();
        assert_eq!(value.as_number(), Some(43.0));
    }
}
