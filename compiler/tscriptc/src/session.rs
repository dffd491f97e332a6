//! One interpreter plus the phase pipeline in front of it.

use thiserror::Error;
use tracing::debug;
use tscript_eval::{Interpreter, InterpreterBuilder, RuntimeError};
use tscript_ir::{Stmt, Token};
use tscript_lexer::LexError;
use tscript_parse::{ParseError, Parser};

use crate::DriverConfig;

/// Failure of one [`Session::feed_line`] call, by phase.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Every error the parser recovered from, in source order.
    #[error("{}", render_parse_errors(.0))]
    Parse(Vec<ParseError>),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl SessionError {
    /// Runtime errors are reported by the interpreter's own print handler
    /// before they reach the session.
    pub fn is_reported(&self) -> bool {
        matches!(self, SessionError::Runtime(_))
    }
}

fn render_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lex `source` in one pass.
pub fn lex_source(source: &str) -> Result<Vec<Token>, SessionError> {
    Ok(tscript_lexer::lex(source)?)
}

/// Parse `tokens`, failing with every recovered error if there were any.
pub fn parse_source(tokens: &[Token]) -> Result<Vec<Stmt>, SessionError> {
    let output = Parser::new(tokens).parse_program();
    if output.has_errors() {
        return Err(SessionError::Parse(output.errors));
    }
    Ok(output.statements)
}

/// A running T-Script program.
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    pub fn new() -> Self {
        Self::with_interpreter(Interpreter::new())
    }

    /// A session whose interpreter honors the driver's limits.
    pub fn from_config(config: &DriverConfig) -> Self {
        Self::with_interpreter(
            InterpreterBuilder::new()
                .max_call_depth(config.max_call_depth)
                .build(),
        )
    }

    pub fn with_interpreter(interpreter: Interpreter) -> Self {
        Session { interpreter }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Lex, parse and run `source`. Nothing runs if lexing or parsing
    /// fails.
    pub fn feed_line(&mut self, source: &str) -> Result<(), SessionError> {
        let tokens = lex_source(source)?;
        let statements = parse_source(&tokens)?;
        debug!(statements = statements.len(), "interpreting");
        self.interpreter.interpret(&statements)?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
