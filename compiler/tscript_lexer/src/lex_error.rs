//! Lexer error types.

use thiserror::Error;
use tscript_ir::Span;

/// A lexer error. Lexing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("[line {line}:{column}] lex error: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("unexpected character '{found}'")]
    UnexpectedCharacter { found: char },
    /// Missing closing `"`.
    #[error("unterminated string")]
    UnterminatedString,
    /// Missing closing `*/`.
    #[error("unterminated multi-line comment")]
    UnterminatedComment,
    /// Unknown escape, or a `\u` escape naming no valid character.
    #[error("invalid escape sequence '\\{escape}'")]
    InvalidEscape { escape: char },
    /// `\x` or `\u` without enough hex digits.
    #[error("invalid hex escape: expected {expected_digits} hex digits")]
    InvalidHexEscape { expected_digits: u8 },
}

impl LexError {
    #[inline]
    fn new(kind: LexErrorKind, line: u32, column: u32, span: Span) -> Self {
        LexError {
            kind,
            line,
            column,
            span,
        }
    }

    #[cold]
    pub fn unexpected_character(found: char, line: u32, column: u32, span: Span) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter { found }, line, column, span)
    }

    #[cold]
    pub fn unterminated_string(line: u32, column: u32, span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedString, line, column, span)
    }

    #[cold]
    pub fn unterminated_comment(line: u32, column: u32, span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedComment, line, column, span)
    }

    #[cold]
    pub fn invalid_escape(escape: char, line: u32, column: u32, span: Span) -> Self {
        Self::new(LexErrorKind::InvalidEscape { escape }, line, column, span)
    }

    #[cold]
    pub fn invalid_hex_escape(expected_digits: u8, line: u32, column: u32, span: Span) -> Self {
        Self::new(
            LexErrorKind::InvalidHexEscape { expected_digits },
            line,
            column,
            span,
        )
    }
}
