//! Script engine resolution.
//!
//! Engines live in a small static registry keyed by name. The harness always
//! asks for [`DEFAULT_ENGINE`]; the registry exists so the backend is an
//! interface, not a hard wiring.

use std::any::Any;

use log::debug;

use crate::context::Glue;
use crate::errors::{Error, Result, RuntimeError, SyntaxError};
use crate::value::Value;

/// Name of the engine the harness is built to use.
pub const DEFAULT_ENGINE: &str = "glue";

/// An executable form of one script, specific to the engine that produced it.
///
/// A unit feeds exactly one evaluation, which consumes it.
pub struct CompiledUnit(Box<dyn Any>);

impl CompiledUnit {
    pub(crate) fn new(unit: impl Any) -> Self {
        CompiledUnit(Box::new(unit))
    }

    pub(crate) fn downcast<T: Any>(self) -> Result<Box<T>, RuntimeError> {
        self.0.downcast().map_err(|_| RuntimeError::ForeignUnit)
    }
}

/// A scripting backend: compiles source text and evaluates the result.
///
/// One engine instance serves a whole run, and whatever internal state it
/// carries (global bindings above all) persists across every call.
pub trait Engine {
    fn compile(&mut self, source: &str) -> Result<CompiledUnit, SyntaxError>;
    fn eval(&mut self, unit: CompiledUnit) -> Result<Value, RuntimeError>;
}

fn new_glue() -> Box<dyn Engine> {
    Box::new(Glue::new())
}

const ENGINES: &[(&str, fn() -> Box<dyn Engine>)] = &[("glue", new_glue)];

/// Resolves a scripting engine by name.
///
/// There is no default and no fallback: an unknown name is a fatal
/// configuration error.
pub fn resolve(name: &str) -> Result<Box<dyn Engine>> {
    debug!("resolving script engine {name:?}");
    ENGINES
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, constructor)| constructor())
        .ok_or_else(|| Error::EngineResolution {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_default_engine() {
        assert!(resolve(DEFAULT_ENGINE).is_ok());
    }

    #[test]
    fn resolve_unknown_engine_errors() {
        let err = resolve("lua").err().unwrap();
        assert!(err.to_string().contains("lua"));
    }
}
