//! User-function calls.

use tscript_ir::Token;

use super::{Flow, Interpreter};
use crate::{Environment, FunctionValue, RuntimeError, Value};

impl Interpreter {
    /// Call a user function with evaluated, arity-checked arguments.
    ///
    /// The body runs in a fresh scope nested in the function's closure, not
    /// the caller's scope. Falling off the end yields `null`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(name = %function.declaration.name.lexeme)
    )]
    pub fn call_function(
        &mut self,
        function: &FunctionValue,
        args: Vec<Value>,
        paren: &Token,
    ) -> Result<Value, RuntimeError> {
        if self.call_depth >= self.max_call_depth {
            return Err(RuntimeError::call_depth_exceeded(
                paren,
                self.max_call_depth,
            ));
        }

        let env = Environment::with_enclosing(&function.closure);
        for (param, arg) in function.declaration.params.iter().zip(args) {
            env.define(param.lexeme.as_str(), arg);
        }

        self.call_depth += 1;
        let flow = self.execute_block(&function.declaration.body, env);
        self.call_depth -= 1;

        match flow? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Null),
        }
    }
}
