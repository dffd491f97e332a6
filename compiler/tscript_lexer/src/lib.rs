//! Lexer for T-Script.
//!
//! [`lex`] turns source text into a token vector terminated by a single
//! `Eof` token. Lexing is a single forward pass and stops at the first
//! [`LexError`]; there is no token-level recovery.

mod cursor;
mod escape;
mod lex_error;

use tscript_ir::{Span, Token, TokenKind, TokenLiteral};

use cursor::Cursor;
use escape::{hex_escape_width, resolve_simple_escape};

pub use lex_error::{LexError, LexErrorKind};

/// Lex `source` into tokens.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).run()?;
    tracing::trace!(count = tokens.len(), "lexed");
    Ok(tokens)
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Start position of the token being scanned.
#[derive(Copy, Clone)]
struct Mark {
    pos: usize,
    line: u32,
    column: u32,
}

struct Lexer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while !self.cursor.is_eof() {
            self.scan_token()?;
        }
        let eof = Token::eof(
            self.cursor.line(),
            self.cursor.column(),
            Self::offset(self.cursor.pos()),
        );
        self.tokens.push(eof);
        Ok(self.tokens)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "sources larger than 4 GiB are not supported"
    )]
    #[inline]
    fn offset(pos: usize) -> u32 {
        pos as u32
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.cursor.pos(),
            line: self.cursor.line(),
            column: self.cursor.column(),
        }
    }

    fn span_from(&self, mark: Mark) -> Span {
        Span::new(Self::offset(mark.pos), Self::offset(self.cursor.pos()))
    }

    fn push(&mut self, kind: TokenKind, mark: Mark, literal: Option<TokenLiteral>) {
        let lexeme = self.cursor.slice_from(mark.pos);
        let span = self.span_from(mark);
        self.tokens.push(Token::new(
            kind,
            lexeme,
            literal,
            mark.line,
            mark.column,
            span,
        ));
    }

    /// Emit `matched` if the next character is `next`, else `single`.
    fn push_either(&mut self, mark: Mark, next: char, matched: TokenKind, single: TokenKind) {
        let kind = if self.cursor.eat(next) { matched } else { single };
        self.push(kind, mark, None);
    }

    fn scan_token(&mut self) -> Result<(), LexError> {
        let mark = self.mark();
        let Some(c) = self.cursor.bump() else {
            return Ok(());
        };

        match c {
            '(' => self.push(TokenKind::LeftParen, mark, None),
            ')' => self.push(TokenKind::RightParen, mark, None),
            '{' => self.push(TokenKind::LeftBrace, mark, None),
            '}' => self.push(TokenKind::RightBrace, mark, None),
            '[' => self.push(TokenKind::LeftBracket, mark, None),
            ']' => self.push(TokenKind::RightBracket, mark, None),
            ',' => self.push(TokenKind::Comma, mark, None),
            '.' => self.push(TokenKind::Dot, mark, None),
            ';' => self.push(TokenKind::Semicolon, mark, None),
            ':' => self.push(TokenKind::Colon, mark, None),
            '?' => self.push(TokenKind::Question, mark, None),
            '*' => self.push(TokenKind::Star, mark, None),
            '+' => self.push_either(mark, '+', TokenKind::PlusPlus, TokenKind::Plus),
            '-' => self.push_either(mark, '-', TokenKind::MinusMinus, TokenKind::Minus),
            '!' => self.push_either(mark, '=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.push_either(mark, '=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.push_either(mark, '=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.push_either(mark, '=', TokenKind::GreaterEqual, TokenKind::Greater),
            '&' => self.push_either(mark, '&', TokenKind::AmpAmp, TokenKind::Amp),
            '|' => self.push_either(mark, '|', TokenKind::PipePipe, TokenKind::Pipe),
            '/' => {
                if self.cursor.eat('/') {
                    self.cursor.skip_line_comment();
                } else if self.cursor.eat('*') {
                    if !self.cursor.skip_block_comment() {
                        return Err(LexError::unterminated_comment(
                            mark.line,
                            mark.column,
                            self.span_from(mark),
                        ));
                    }
                } else {
                    self.push(TokenKind::Slash, mark, None);
                }
            }
            ' ' | '\t' | '\r' | '\n' => {}
            '"' => self.string(mark)?,
            '0'..='9' => self.number(mark),
            c if is_ident_start(c) => self.identifier(mark),
            c => {
                return Err(LexError::unexpected_character(
                    c,
                    mark.line,
                    mark.column,
                    self.span_from(mark),
                ));
            }
        }
        Ok(())
    }

    fn number(&mut self, mark: Mark) {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.bump();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
        // `[0-9]+(\.[0-9]+)?` always parses as f64.
        let value = self
            .cursor
            .slice_from(mark.pos)
            .parse::<f64>()
            .unwrap_or_default();
        self.push(TokenKind::Number, mark, Some(TokenLiteral::Number(value)));
    }

    fn identifier(&mut self, mark: Mark) {
        self.cursor.eat_while(is_ident_continue);
        let kind =
            TokenKind::keyword(self.cursor.slice_from(mark.pos)).unwrap_or(TokenKind::Identifier);
        self.push(kind, mark, None);
    }

    /// Scan a string literal; the opening quote is already consumed.
    fn string(&mut self, mark: Mark) -> Result<(), LexError> {
        let mut value = String::new();
        loop {
            let escape_mark = self.mark();
            match self.cursor.bump() {
                None => {
                    return Err(LexError::unterminated_string(
                        mark.line,
                        mark.column,
                        self.span_from(mark),
                    ));
                }
                Some('"') => break,
                Some('\\') => value.push(self.escape(mark, escape_mark)?),
                Some(c) => value.push(c),
            }
        }
        self.push(TokenKind::String, mark, Some(TokenLiteral::String(value)));
        Ok(())
    }

    /// Decode one escape; the backslash at `escape_mark` is already consumed.
    fn escape(&mut self, string_mark: Mark, escape_mark: Mark) -> Result<char, LexError> {
        let Some(c) = self.cursor.bump() else {
            return Err(LexError::unterminated_string(
                string_mark.line,
                string_mark.column,
                self.span_from(string_mark),
            ));
        };
        if let Some(resolved) = resolve_simple_escape(c) {
            return Ok(resolved);
        }
        let Some(width) = hex_escape_width(c) else {
            return Err(LexError::invalid_escape(
                c,
                escape_mark.line,
                escape_mark.column,
                self.span_from(escape_mark),
            ));
        };

        let mut code = 0u32;
        for _ in 0..width {
            match self.cursor.peek().and_then(|d| d.to_digit(16)) {
                Some(digit) => {
                    self.cursor.bump();
                    code = code * 16 + digit;
                }
                None => {
                    return Err(LexError::invalid_hex_escape(
                        width,
                        escape_mark.line,
                        escape_mark.column,
                        self.span_from(escape_mark),
                    ));
                }
            }
        }
        // Surrogate halves have no `char`.
        char::from_u32(code).ok_or_else(|| {
            LexError::invalid_escape(
                c,
                escape_mark.line,
                escape_mark.column,
                self.span_from(escape_mark),
            )
        })
    }
}
