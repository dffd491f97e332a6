//! Recursive descent parser for T-Script.
//!
//! Two entry points:
//! - [`Parser::parse_program`] recovers from errors with panic-mode
//!   synchronization and reports every diagnostic it found.
//! - [`parse`] keeps the single-error contract: the first error wins.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use recovery::{synchronize, TokenSet, STMT_START};

use tscript_ir::{Stmt, Token};

/// Maximum number of parameters or call arguments.
pub const MAX_ARITY: usize = 255;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

/// Statements and diagnostics from a recovering parse.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens`, which must end with `Eof`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse a whole program, collecting every error.
    ///
    /// A declaration that fails to parse is dropped; parsing resumes at the
    /// next statement boundary.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        let mut errors = Vec::new();

        while !self.cursor.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(e) => {
                    tracing::trace!(error = %e, "synchronizing after parse error");
                    errors.push(e);
                    synchronize(&mut self.cursor);
                }
            }
        }

        tracing::debug!(
            statements = statements.len(),
            errors = errors.len(),
            "parsed program"
        );
        ParseOutput { statements, errors }
    }
}

/// Parse `tokens` into statements, failing on the first error.
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, ParseError> {
    let output = Parser::new(tokens).parse_program();
    match output.errors.into_iter().next() {
        Some(first) => Err(first),
        None => Ok(output.statements),
    }
}
