//! Runtime errors.
//!
//! Every evaluation failure is a [`RuntimeError`] located at the token
//! that caused it. `return` is not an error; see [`crate::Flow`].

use thiserror::Error;
use tscript_ir::Token;

/// What went wrong at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuntimeErrorKind {
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String },
    #[error("operand must be a number")]
    OperandMustBeNumber,
    #[error("operands must be numbers")]
    OperandsMustBeNumbers,
    #[error("operands must be two numbers or two strings")]
    OperandsMustBeNumbersOrStrings,
    #[error("can only call functions")]
    NotCallable,
    #[error("expected {expected} arguments but got {got}")]
    ArityMismatch { expected: usize, got: usize },
    /// A native function rejected its arguments.
    #[error("{message}")]
    NativeFailure { message: String },
    #[error("maximum call depth exceeded ({limit})")]
    CallDepthExceeded { limit: usize },
}

/// A runtime error with the token it is reported at.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("[line {line}] runtime error: {kind}", line = .token.line)]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub token: Token,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, token: &Token) -> Self {
        RuntimeError {
            kind,
            token: token.clone(),
        }
    }

    #[cold]
    pub fn undefined_variable(name: &Token) -> Self {
        Self::new(
            RuntimeErrorKind::UndefinedVariable {
                name: name.lexeme.clone(),
            },
            name,
        )
    }

    #[cold]
    pub fn operand_must_be_number(operator: &Token) -> Self {
        Self::new(RuntimeErrorKind::OperandMustBeNumber, operator)
    }

    #[cold]
    pub fn operands_must_be_numbers(operator: &Token) -> Self {
        Self::new(RuntimeErrorKind::OperandsMustBeNumbers, operator)
    }

    #[cold]
    pub fn operands_must_be_numbers_or_strings(operator: &Token) -> Self {
        Self::new(RuntimeErrorKind::OperandsMustBeNumbersOrStrings, operator)
    }

    #[cold]
    pub fn not_callable(paren: &Token) -> Self {
        Self::new(RuntimeErrorKind::NotCallable, paren)
    }

    #[cold]
    pub fn arity_mismatch(paren: &Token, expected: usize, got: usize) -> Self {
        Self::new(RuntimeErrorKind::ArityMismatch { expected, got }, paren)
    }

    #[cold]
    pub fn native_failure(paren: &Token, message: impl Into<String>) -> Self {
        Self::new(
            RuntimeErrorKind::NativeFailure {
                message: message.into(),
            },
            paren,
        )
    }

    #[cold]
    pub fn call_depth_exceeded(paren: &Token, limit: usize) -> Self {
        Self::new(RuntimeErrorKind::CallDepthExceeded { limit }, paren)
    }
}
