//! Token types produced by the lexer and consumed by the parser.

mod kind;

use std::fmt;

use crate::Span;

pub use kind::TokenKind;

/// Decoded literal payload for NUMBER and STRING tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenLiteral {
    Number(f64),
    String(String),
}

/// A lexed token.
///
/// `line` is the 1-based line of the first character and `column` the
/// number of characters before it on that line. `length` counts characters of `lexeme`,
/// so it differs from `span.len()` for non-ASCII text.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<TokenLiteral>,
    pub line: u32,
    pub column: u32,
    pub length: u32,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<TokenLiteral>,
        line: u32,
        column: u32,
        span: Span,
    ) -> Self {
        let lexeme = lexeme.into();
        let length = u32::try_from(lexeme.chars().count()).unwrap_or(u32::MAX);
        Token {
            kind,
            lexeme,
            literal,
            line,
            column,
            length,
            span,
        }
    }

    /// The end-of-input marker.
    pub fn eof(line: u32, column: u32, offset: u32) -> Self {
        Token::new(TokenKind::Eof, "", None, line, column, Span::point(offset))
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.kind, self.lexeme)?;
        match &self.literal {
            Some(TokenLiteral::Number(n)) => write!(f, " {}", crate::number::format_number(*n)),
            Some(TokenLiteral::String(s)) => write!(f, " {s:?}"),
            None => Ok(()),
        }
    }
}
