//! Statement execution.

use std::rc::Rc;

use tracing::trace;
use tscript_ir::Stmt;
use tscript_stack::ensure_sufficient_stack;

use super::{Flow, Interpreter};
use crate::{Callable, Environment, FunctionValue, RuntimeError, Value};

impl Interpreter {
    /// Execute one statement in the current environment.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<Flow, RuntimeError> {
        ensure_sufficient_stack(|| self.execute_inner(stmt))
    }

    fn execute_inner(&mut self, stmt: &Stmt) -> Result<Flow, RuntimeError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Null,
                };
                self.env.define(name.lexeme.as_str(), value);
            }
            Stmt::Block(statements) => {
                let env = Environment::with_enclosing(&self.env);
                return self.execute_block(statements, env);
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    return self.execute(then_branch);
                }
                if let Some(else_branch) = else_branch {
                    return self.execute(else_branch);
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let Flow::Return(value) = self.execute(body)? {
                        return Ok(Flow::Return(value));
                    }
                }
            }
            Stmt::Function(declaration) => {
                let function = FunctionValue {
                    declaration: Rc::clone(declaration),
                    closure: self.env.clone(),
                };
                self.env.define(
                    declaration.name.lexeme.as_str(),
                    Value::Callable(Callable::User(Rc::new(function))),
                );
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Null,
                };
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Execute `statements` inside `env`, stopping early on `return`.
    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        env: Environment,
    ) -> Result<Flow, RuntimeError> {
        trace!(statements = statements.len(), "enter block");
        self.with_env(env, |scoped| {
            for statement in statements {
                if let Flow::Return(value) = scoped.execute(statement)? {
                    return Ok(Flow::Return(value));
                }
            }
            Ok(Flow::Normal)
        })
    }
}
