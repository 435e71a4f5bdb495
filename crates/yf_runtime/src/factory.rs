//! Generator factory and instance wrappers over engine values.

use boa_engine::{js_string, JsObject, JsString, JsValue, Source};

use crate::engine::{js_error_message, Engine};
use crate::RuntimeError;

/// Attaches the `isGenerator` capability flag to a materialized factory.
const TAGGER: &str =
    "(function (factory) { factory.isGenerator = function () { return true; }; return factory; })";

/// A callable that produces one independent generator instance per call.
#[derive(Debug)]
pub struct GeneratorFactory {
    function: JsObject,
}

impl GeneratorFactory {
    /// Decorate a materialized factory with the `isGenerator()` predicate.
    pub fn wrap(engine: &mut Engine, function: JsObject) -> Result<Self, RuntimeError> {
        let context = engine.context_mut();
        let tagger = context
            .eval(Source::from_bytes(TAGGER))
            .map_err(|e| RuntimeError::Materialize(js_error_message(&e, context)))?
            .to_object(context)
            .map_err(|e| RuntimeError::Materialize(js_error_message(&e, context)))?;
        tagger
            .call(
                &JsValue::undefined(),
                &[JsValue::from(function.clone())],
                context,
            )
            .map_err(|e| RuntimeError::Materialize(js_error_message(&e, context)))?;
        Ok(Self { function })
    }

    /// Report the factory's capability flag by calling `isGenerator()`.
    pub fn is_generator(&self, engine: &mut Engine) -> Result<bool, RuntimeError> {
        let context = engine.context_mut();
        let probe = self
            .function
            .get(js_string!("isGenerator"), context)
            .map_err(|e| RuntimeError::Protocol(js_error_message(&e, context)))?;
        if !probe.is_callable() {
            return Ok(false);
        }
        let probe = probe
            .to_object(context)
            .map_err(|e| RuntimeError::Protocol(js_error_message(&e, context)))?;
        let result = probe
            .call(&JsValue::from(self.function.clone()), &[], context)
            .map_err(|e| RuntimeError::Protocol(js_error_message(&e, context)))?;
        Ok(result.to_boolean())
    }

    /// Start one independent generator instance. No user code runs until the
    /// instance's first step.
    pub fn invoke(
        &self,
        engine: &mut Engine,
        args: &[JsValue],
    ) -> Result<GeneratorInstance, RuntimeError> {
        let context = engine.context_mut();
        let instance = self
            .function
            .call(&JsValue::undefined(), args, context)
            .map_err(|e| RuntimeError::Routine(js_error_message(&e, context)))?;
        if !instance.is_object() {
            return Err(RuntimeError::Protocol(
                "factory call did not produce a generator object".to_string(),
            ));
        }
        let object = instance
            .to_object(context)
            .map_err(|e| RuntimeError::Protocol(js_error_message(&e, context)))?;
        Ok(GeneratorInstance { object })
    }

    /// The factory as an engine value, e.g. for binding it as a global that
    /// another routine delegates to.
    pub fn to_value(&self) -> JsValue {
        JsValue::from(self.function.clone())
    }
}

/// One stepped, stateful generator. Synchronous and pull-based: each step
/// runs user code until the next suspension point or termination.
pub struct GeneratorInstance {
    object: JsObject,
}

/// Result of one step of the protocol.
#[derive(Debug, Clone)]
pub struct Step {
    pub value: JsValue,
    pub done: bool,
}

impl GeneratorInstance {
    /// Advance to the next suspension point. `resume` becomes the value of
    /// the suspension expression that was last reached. Stepping a finished
    /// instance keeps returning a terminal step, per engine semantics.
    pub fn next(&self, engine: &mut Engine, resume: Option<JsValue>) -> Result<Step, RuntimeError> {
        self.step(engine, "next", resume.unwrap_or_else(JsValue::undefined))
    }

    /// Inject an error at the current suspension point. If user code catches
    /// it the step resolves normally; otherwise it surfaces as
    /// [`RuntimeError::Routine`].
    pub fn throw(&self, engine: &mut Engine, error: JsValue) -> Result<Step, RuntimeError> {
        self.step(engine, "throw", error)
    }

    fn step(
        &self,
        engine: &mut Engine,
        method: &str,
        argument: JsValue,
    ) -> Result<Step, RuntimeError> {
        let context = engine.context_mut();
        let step_fn = self
            .object
            .get(JsString::from(method), context)
            .map_err(|e| RuntimeError::Protocol(js_error_message(&e, context)))?;
        if !step_fn.is_callable() {
            return Err(RuntimeError::Protocol(format!(
                "generator instance has no {method} method"
            )));
        }
        let step_fn = step_fn
            .to_object(context)
            .map_err(|e| RuntimeError::Protocol(js_error_message(&e, context)))?;

        let result = step_fn
            .call(&JsValue::from(self.object.clone()), &[argument], context)
            .map_err(|e| RuntimeError::Routine(js_error_message(&e, context)))?;
        if !result.is_object() {
            return Err(RuntimeError::Protocol(
                "step did not produce a result object".to_string(),
            ));
        }
        let result = result
            .to_object(context)
            .map_err(|e| RuntimeError::Protocol(js_error_message(&e, context)))?;

        let value = result
            .get(js_string!("value"), context)
            .map_err(|e| RuntimeError::Protocol(js_error_message(&e, context)))?;
        let done = result
            .get(js_string!("done"), context)
            .map_err(|e| RuntimeError::Protocol(js_error_message(&e, context)))?
            .to_boolean();
        Ok(Step { value, done })
    }
}
