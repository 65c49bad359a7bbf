//! The evaluation driver: bootstrap once, then compile, evaluate, and print
//! each script file in argument order, stopping at the first failure.

use std::fs;
use std::io::Write;

use log::debug;

use crate::engine::{self, Engine, DEFAULT_ENGINE};
use crate::errors::{Error, Result};

/// The fixed activation source evaluated once before any script.
///
/// `activate` is the host's designated initializer; scripts rely on the
/// bindings it installs, so its success is a precondition for the whole run.
pub const BOOTSTRAP_SOURCE: &str = "activate()";

/// Pseudo-path used for the bootstrap unit in diagnostics.
const BOOTSTRAP_PATH: &str = "<bootstrap>";

/// Drives one complete run: resolve engine, bootstrap, then the script loop.
pub struct Driver {
    engine: Box<dyn Engine>,
}

impl Driver {
    /// Resolves the build-time engine. A resolution failure is fatal and
    /// happens before anything else.
    pub fn new() -> Result<Driver> {
        Ok(Driver {
            engine: engine::resolve(DEFAULT_ENGINE)?,
        })
    }

    /// Runs the bootstrap activation, then every script in `paths` in order,
    /// writing each result as one line to `out`.
    ///
    /// Strictly sequential: each script is read, compiled, evaluated, and
    /// printed before the next one is read. The first failure aborts the
    /// loop; output already written stands.
    pub fn run<W: Write>(&mut self, paths: &[String], out: &mut W) -> Result<()> {
        self.bootstrap()?;
        for path in paths {
            self.run_script(path, out)?;
        }
        Ok(())
    }

    /// Evaluates the fixed bootstrap source exactly once; the result value is
    /// discarded. Runs even when there are no scripts at all.
    fn bootstrap(&mut self) -> Result<()> {
        debug!("running bootstrap activation");
        let unit = self
            .engine
            .compile(BOOTSTRAP_SOURCE)
            .map_err(|source| Error::Compile {
                path: BOOTSTRAP_PATH.to_string(),
                source,
            })?;
        self.engine.eval(unit).map_err(|source| Error::Evaluation {
            path: BOOTSTRAP_PATH.to_string(),
            source,
        })?;
        Ok(())
    }

    fn run_script<W: Write>(&mut self, path: &str, out: &mut W) -> Result<()> {
        debug!("running script {path:?}");
        let source = fs::read_to_string(path).map_err(|source| Error::FileAccess {
            path: path.to_string(),
            source,
        })?;
        let unit = self
            .engine
            .compile(&source)
            .map_err(|source| Error::Compile {
                path: path.to_string(),
                source,
            })?;
        let value = self.engine.eval(unit).map_err(|source| Error::Evaluation {
            path: path.to_string(),
            source,
        })?;
        // One line per script, visible before the next script is touched.
        writeln!(out, "{value}").map_err(Error::Output)?;
        out.flush().map_err(Error::Output)?;
        Ok(())
    }
}
