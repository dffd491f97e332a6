//! Character cursor over the source text.
//!
//! Tracks the byte offset plus the line (from 1) and column (from 0, reset
//! at each `\n`) of the next character. Columns count characters, not bytes.

/// Forward-only cursor.
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            pos: 0,
            line: 1,
            column: 0,
        }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consume one character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume the next character if it equals `expected`.
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Source text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    /// Skip to the next `\n` (not consumed) or EOF.
    pub fn skip_line_comment(&mut self) {
        let rest = self.rest();
        let len = memchr::memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
        self.skip_within_line(&rest[..len]);
    }

    /// Skip past the next `*/`, tracking newlines in between.
    ///
    /// Returns `false` when the input ends first; the cursor is then at EOF.
    pub fn skip_block_comment(&mut self) -> bool {
        let rest = self.rest();
        match memchr::memmem::find(rest.as_bytes(), b"*/") {
            Some(offset) => {
                self.skip_text(&rest[..offset + 2]);
                true
            }
            None => {
                self.skip_text(rest);
                false
            }
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "a single line longer than u32::MAX characters is not supported"
    )]
    fn skip_within_line(&mut self, text: &str) {
        self.pos += text.len();
        self.column += text.chars().count() as u32;
    }

    /// Skip `text`, which must be the next bytes of the input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line counts are bounded by source length"
    )]
    fn skip_text(&mut self, text: &str) {
        let bytes = text.as_bytes();
        match memchr::memrchr(b'\n', bytes) {
            Some(last) => {
                self.line += memchr::memchr_iter(b'\n', bytes).count() as u32;
                self.column = 0;
                self.pos += last + 1;
                self.skip_within_line(&text[last + 1..]);
            }
            None => self.skip_within_line(text),
        }
    }
}
