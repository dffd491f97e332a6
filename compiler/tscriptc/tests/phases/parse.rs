use pretty_assertions::assert_eq;
use tscript_ir::ast::printer::print_program;
use tscript_ir::{Expr, Stmt, TokenKind};
use tscript_parse::ParseErrorKind;
use tscriptc::{lex_source, parse_source, SessionError};

fn parse(source: &str) -> Result<Vec<Stmt>, SessionError> {
    parse_source(&lex_source(source).unwrap())
}

#[test]
fn two_plus_three_is_one_expression_statement() {
    let statements = parse("2 + 3;").unwrap();
    assert_eq!(statements.len(), 1);
    let Stmt::Expression(Expr::Binary { operator, .. }) = &statements[0] else {
        panic!("expected a binary expression statement, got {statements:?}");
    };
    assert_eq!(operator.kind, TokenKind::Plus);
}

#[test]
fn printed_program() {
    let statements = parse("var x = 1; if (x < 2) print(x); else { x = -x; }").unwrap();
    assert_eq!(
        print_program(&statements),
        "(var x 1)\n(if (< x 2) (expr (call print x)) (block (expr (= x (- x)))))\n"
    );
}

#[test]
fn every_recovered_error_is_reported() {
    let err = parse("var = 1;\nprint(1 +);\nvar ok = 2;").unwrap_err();
    let SessionError::Parse(errors) = &err else {
        panic!("expected parse errors, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].line, 1);
    assert_eq!(errors[1].line, 2);
    assert_eq!(errors[1].kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(err.to_string().lines().count(), 2);
}

#[test]
fn invalid_assignment_target_is_a_parse_error() {
    let err = parse("1 = 2;").unwrap_err();
    let SessionError::Parse(errors) = err else {
        panic!("expected parse errors");
    };
    assert_eq!(errors[0].kind, ParseErrorKind::InvalidAssignmentTarget);
}
