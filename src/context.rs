use log::debug;

use crate::compiler::{self, ast::Chunk};
use crate::engine::{CompiledUnit, Engine};
use crate::errors::{Result, RuntimeError, SyntaxError};
use crate::interp::{self, Env};
use crate::libs;
use crate::value::Value;

/// The glue engine: persistent global bindings plus the compile and eval
/// entry points.
///
/// A fresh engine knows only the `activate` builtin; the host's real surface
/// is installed when the bootstrap activation runs.
pub struct Glue {
    env: Env,
}

impl Glue {
    pub fn new() -> Glue {
        let mut env = Env::new();
        env.globals.extend(libs::builtin_variables());
        Glue { env }
    }

    /// Compile glue source text into a chunk.
    pub fn compile(&self, input: &str) -> Result<Chunk, SyntaxError> {
        compiler::compile(input)
    }

    /// Evaluate a chunk against this engine's globals.
    pub fn eval_chunk(&mut self, chunk: &Chunk) -> Result<Value, RuntimeError> {
        interp::eval_chunk(&mut self.env, chunk)
    }

    /// Read access to a global binding, mainly for tests and embedders.
    pub fn global(&self, name: &str) -> Option<&Value> {
        self.env.get(name)
    }
}

impl Engine for Glue {
    fn compile(&mut self, source: &str) -> Result<CompiledUnit, SyntaxError> {
        debug!("compiling {} bytes of glue source", source.len());
        Ok(CompiledUnit::new(Glue::compile(self, source)?))
    }

    fn eval(&mut self, unit: CompiledUnit) -> Result<Value, RuntimeError> {
        let chunk: Box<Chunk> = unit.downcast()?;
        self.eval_chunk(&chunk)
    }
}

impl Default for Glue {
    fn default() -> Self {
        Glue::new()
    }
}
