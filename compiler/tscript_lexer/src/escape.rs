//! String escape resolution.
//!
//! Valid escapes: `\n` `\t` `\r` `\"` `\\` `\0`, plus `\xHH` (exactly two
//! hex digits) and `\uHHHH` (exactly four).

/// Resolve a single-character escape.
#[inline]
pub(crate) fn resolve_simple_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Number of hex digits a numeric escape introducer requires.
#[inline]
pub(crate) fn hex_escape_width(c: char) -> Option<u8> {
    match c {
        'x' => Some(2),
        'u' => Some(4),
        _ => None,
    }
}
