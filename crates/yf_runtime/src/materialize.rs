//! Materializer: printed routine text to a callable factory.

use boa_engine::{JsObject, Source};

use crate::engine::{js_error_message, Engine};
use crate::RuntimeError;

/// Evaluate the printed routine inside the engine and return the factory.
///
/// The printed text is wrapped in a loadable unit whose body is
/// `return <printed-expression>`, so evaluation yields exactly the function
/// value regardless of how the printer terminated the statement. A syntax or
/// reference error here means the pipeline produced a malformed program;
/// there is no local recovery.
pub fn materialize(engine: &mut Engine, printed: &str) -> Result<JsObject, RuntimeError> {
    let unit = format!("(function () {{ return {printed} }})()");
    tracing::debug!(bytes = unit.len(), "materializing generator factory");

    let context = engine.context_mut();
    let value = context
        .eval(Source::from_bytes(&unit))
        .map_err(|e| RuntimeError::Materialize(js_error_message(&e, context)))?;

    if !value.is_callable() {
        return Err(RuntimeError::Materialize(
            "loadable unit did not evaluate to a callable".to_string(),
        ));
    }
    value
        .to_object(context)
        .map_err(|e| RuntimeError::Materialize(js_error_message(&e, context)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_a_printed_function_expression() {
        let mut engine = Engine::new();
        let factory = materialize(&mut engine, "(function* () { yield 1; });");
        assert!(factory.is_ok());
    }

    #[test]
    fn non_callable_results_are_pipeline_defects() {
        let mut engine = Engine::new();
        let err = materialize(&mut engine, "42;").unwrap_err();
        assert!(matches!(err, RuntimeError::Materialize(_)));
    }

    #[test]
    fn malformed_text_is_a_pipeline_defect() {
        let mut engine = Engine::new();
        let err = materialize(&mut engine, "function* ( {").unwrap_err();
        assert!(matches!(err, RuntimeError::Materialize(_)));
    }
}
