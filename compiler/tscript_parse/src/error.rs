//! Parse error types.

use std::fmt;

use tscript_ir::{Span, Token, TokenKind};

/// What kind of parse error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token was missing.
    UnexpectedToken { expected: TokenKind },
    /// No expression starts at this token.
    ExpectedExpression,
    /// More than [`crate::MAX_ARITY`] parameters.
    TooManyParameters,
    /// More than [`crate::MAX_ARITY`] arguments.
    TooManyArguments,
    /// `=` with something other than a variable on its left.
    InvalidAssignmentTarget,
    /// `++`/`--` before something other than a variable.
    InvalidPrefixTarget,
    /// `++`/`--` after something other than a variable.
    InvalidPostfixTarget,
}

/// A parse error located at the offending token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    /// Source text of the offending token; empty at end of input.
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, token: &Token) -> Self {
        ParseError {
            kind,
            message: message.into(),
            lexeme: token.lexeme.clone(),
            line: token.line,
            column: token.column,
            span: token.span,
        }
    }

    /// Whether the error was reported at end of input.
    pub fn is_at_end(&self) -> bool {
        self.lexeme.is_empty()
    }

    #[cold]
    pub fn unexpected_token(expected: TokenKind, message: &str, found: &Token) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken { expected }, message, found)
    }

    #[cold]
    pub fn expected_expression(found: &Token) -> Self {
        Self::new(ParseErrorKind::ExpectedExpression, "expected expression", found)
    }

    #[cold]
    pub fn too_many_parameters(at: &Token) -> Self {
        Self::new(
            ParseErrorKind::TooManyParameters,
            format!("can't have more than {} parameters", crate::MAX_ARITY),
            at,
        )
    }

    #[cold]
    pub fn too_many_arguments(at: &Token) -> Self {
        Self::new(
            ParseErrorKind::TooManyArguments,
            format!("can't have more than {} arguments", crate::MAX_ARITY),
            at,
        )
    }

    #[cold]
    pub fn invalid_assignment_target(equals: &Token) -> Self {
        Self::new(
            ParseErrorKind::InvalidAssignmentTarget,
            "invalid assignment target",
            equals,
        )
    }

    #[cold]
    pub fn invalid_prefix_target(operator: &Token) -> Self {
        Self::new(
            ParseErrorKind::InvalidPrefixTarget,
            format!(
                "invalid left-hand side in prefix '{}' expression",
                operator.lexeme
            ),
            operator,
        )
    }

    #[cold]
    pub fn invalid_postfix_target(operator: &Token) -> Self {
        Self::new(
            ParseErrorKind::InvalidPostfixTarget,
            format!(
                "invalid right-hand side in postfix '{}' expression",
                operator.lexeme
            ),
            operator,
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}:{}] parse error ", self.line, self.column)?;
        if self.is_at_end() {
            f.write_str("at end")?;
        } else {
            write!(f, "at '{}'", self.lexeme)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for ParseError {}
