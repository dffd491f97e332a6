//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::{natives, stdout_handler, Environment, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Every built interpreter gets a fresh global scope with the natives
/// registered.
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Set the handler `print` and diagnostics write to.
    ///
    /// Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the maximum number of nested T-Script calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        let globals = Environment::new();
        natives::register(&globals);
        Interpreter {
            env: globals.clone(),
            globals,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
