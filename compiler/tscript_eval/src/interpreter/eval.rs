//! Expression evaluation.

use tscript_ir::{Expr, Token, TokenKind};
use tscript_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::{operators, Arity, RuntimeError, Value};

impl Interpreter {
    /// Evaluate an expression in the current environment.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        ensure_sufficient_stack(|| self.evaluate_inner(expr))
    }

    fn evaluate_inner(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Variable { name } => self.env.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env.assign(name, value.clone())?;
                Ok(value)
            }
            Expr::Unary { operator, right } => {
                let operand = self.evaluate(right)?;
                operators::unary(operator, &operand)
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                operators::binary(operator, left, right)
            }
            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let short_circuits = if operator.kind == TokenKind::PipePipe {
                    left.is_truthy()
                } else {
                    !left.is_truthy()
                };
                if short_circuits {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.evaluate(then_branch)
                } else {
                    self.evaluate(else_branch)
                }
            }
            Expr::Call {
                callee,
                paren,
                args,
            } => self.eval_call(callee, paren, args),
            Expr::Prefix { operator, name } => {
                let (_, new) = self.step(name, operator)?;
                Ok(Value::Number(new))
            }
            Expr::Postfix { name, operator } => {
                let (old, _) = self.step(name, operator)?;
                Ok(Value::Number(old))
            }
        }
    }

    fn eval_call(
        &mut self,
        callee: &Expr,
        paren: &Token,
        args: &[Expr],
    ) -> Result<Value, RuntimeError> {
        let callee = self.evaluate(callee)?;
        let args = args
            .iter()
            .map(|arg| self.evaluate(arg))
            .collect::<Result<Vec<_>, _>>()?;

        let Value::Callable(callable) = callee else {
            return Err(RuntimeError::not_callable(paren));
        };
        if let Arity::Fixed(expected) = callable.arity() {
            if expected != args.len() {
                return Err(RuntimeError::arity_mismatch(paren, expected, args.len()));
            }
        }
        callable.call(self, args, paren)
    }

    /// Apply `++`/`--` to the variable `name`. Returns the old and new value.
    fn step(&mut self, name: &Token, operator: &Token) -> Result<(f64, f64), RuntimeError> {
        let old = self
            .env
            .get(name)?
            .as_number()
            .ok_or_else(|| RuntimeError::operand_must_be_number(operator))?;
        let new = if operator.kind == TokenKind::PlusPlus {
            old + 1.0
        } else {
            old - 1.0
        };
        self.env.assign(name, Value::Number(new))?;
        Ok((old, new))
    }
}
