use pretty_assertions::assert_eq;
use tscript_ir::{TokenKind, TokenLiteral};
use tscriptc::{lex_source, SessionError};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_source(source)
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn two_plus_three_is_four_tokens() {
    let tokens = lex_source("2 + 3").unwrap();
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Eof
        ]
    );
    assert_eq!(tokens[0].literal, Some(TokenLiteral::Number(2.0)));
    assert_eq!(tokens[2].literal, Some(TokenLiteral::Number(3.0)));
}

#[test]
fn whole_program() {
    assert_eq!(
        kinds("fun add(a, b) { return a + b; }"),
        vec![
            TokenKind::Fun,
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Return,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_produce_no_tokens() {
    assert_eq!(
        kinds("// line\n/* block\n */ x"),
        vec![TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn lex_errors_surface_as_session_errors() {
    let err = lex_source("var s = \"open;").unwrap_err();
    assert!(matches!(err, SessionError::Lex(_)));
    assert!(err.to_string().contains("unterminated string"));
    assert!(!err.is_reported());
}
