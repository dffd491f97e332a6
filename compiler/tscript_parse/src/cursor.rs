//! Token cursor.
//!
//! `peek`/`previous`/`advance`/`check`/`eat` are the only primitives the
//! grammar uses; `expect` is `eat` with an error for the failing case.

use tscript_ir::{Token, TokenKind};

use crate::recovery::TokenSet;
use crate::ParseError;

/// Cursor over a lexed token slice.
///
/// The slice must end with an `Eof` token, as `tscript_lexer::lex` output
/// does; the cursor never advances past it.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        debug_assert!(
            tokens.last().is_some_and(Token::is_eof),
            "token stream must end with Eof"
        );
        Cursor { tokens, pos: 0 }
    }

    /// The token under the cursor.
    #[inline]
    pub fn peek(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// The most recently consumed token.
    #[inline]
    pub fn previous(&self) -> &'a Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_any(&self, kinds: TokenSet) -> bool {
        kinds.contains(self.current_kind())
    }

    /// Consume the current token and return it. Stays put at `Eof`.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let current = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        current
    }

    /// Consume the current token if it has the given kind.
    #[inline]
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume the current token if its kind is in `kinds`.
    #[inline]
    pub fn eat_any(&mut self, kinds: TokenSet) -> Option<&'a Token> {
        if self.check_any(kinds) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of the given kind or fail with `message`.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind, message))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: TokenKind, message: &str) -> ParseError {
        ParseError::unexpected_token(kind, message, self.peek())
    }
}
