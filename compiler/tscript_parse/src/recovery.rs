//! Error recovery for the parser.
//!
//! Token kinds are packed into a `u128` bitset so that membership tests
//! (used both by recovery and by the operator loops) are a single AND.

use tscript_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u128);

// One bit per token kind.
const _: () = assert!(TokenKind::COUNT <= 128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind (builder form for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

/// Keywords that begin a new statement.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::Const)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Return);

/// Panic-mode recovery: discard tokens until a statement boundary.
///
/// Stops just after a `;` or in front of a statement keyword. Always
/// consumes at least one token unless already at end of input, so the
/// declaration loop makes progress.
pub fn synchronize(cursor: &mut Cursor<'_>) {
    cursor.advance();
    while !cursor.is_at_end() {
        if cursor.previous().kind == TokenKind::Semicolon {
            return;
        }
        if cursor.check_any(STMT_START) {
            return;
        }
        cursor.advance();
    }
}
