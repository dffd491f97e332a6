//! Tree-walking interpreter for T-Script.
//!
//! Statements return a [`Flow`] so `return` can unwind to the nearest call
//! boundary without being confused with a [`RuntimeError`]. The current
//! environment is swapped per block and per call through
//! [`ScopedInterpreter`], which restores the previous one on every exit
//! path.

mod builder;
mod call;
mod eval;
mod exec;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use tracing::debug;
use tscript_ir::Stmt;

use crate::{Environment, RuntimeError, SharedPrintHandler, Value};

/// Default limit on nested T-Script function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Outcome of executing a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    Normal,
    /// A `return` is unwinding to the enclosing call.
    Return(Value),
}

/// Evaluator state: the global scope, the current scope and the output
/// sink. Globals persist across [`Interpreter::interpret`] calls.
pub struct Interpreter {
    globals: Environment,
    pub(crate) env: Environment,
    print_handler: SharedPrintHandler,
    max_call_depth: usize,
    call_depth: usize,
}

impl Interpreter {
    /// An interpreter with `print` bound and output going to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Execute `statements` in order against the global scope.
    ///
    /// The first runtime error abandons the remaining statements. It is
    /// reported through the print handler and returned.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            match self.execute(statement) {
                Ok(Flow::Normal) => {}
                // Top-level `return` ends this program.
                Ok(Flow::Return(_)) => break,
                Err(error) => {
                    debug!(%error, "runtime error aborted interpret");
                    self.print_handler.report_error(&error.to_string());
                    return Err(error);
                }
            }
        }
        Ok(())
    }

    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    /// The scope statements currently execute in.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
