use pretty_assertions::assert_eq;
use tscript_eval::RuntimeErrorKind;
use tscriptc::SessionError;

use crate::buffered_session;

/// Feed each line to one session and return the captured output.
fn run_lines(lines: &[&str]) -> String {
    let mut session = buffered_session();
    for line in lines {
        if let Err(e) = session.feed_line(line) {
            panic!("{line:?} failed: {e}");
        }
    }
    session.interpreter().print_handler().get_output()
}

#[test]
fn scenarios() {
    assert_eq!(run_lines(&["print(2 + 3 * 4);"]), "14\n");
    assert_eq!(run_lines(&["print(5 & 3 | 2);"]), "3\n");
    assert_eq!(run_lines(&["var x=1; print(x++); print(x);"]), "1\n2\n");
    assert_eq!(
        run_lines(&["fun add(a,b){return a+b;} print(add(1,2));"]),
        "3\n"
    );
    assert_eq!(run_lines(&["2 + 3;"]), "");
}

#[test]
fn globals_persist_between_lines() {
    assert_eq!(
        run_lines(&[
            "var count = 0;",
            "fun bump() { count = count + 1; return count; }",
            "bump();",
            "print(bump());",
        ]),
        "2\n"
    );
}

#[test]
fn print_without_arguments_is_a_reported_runtime_error() {
    let mut session = buffered_session();
    let err = session.feed_line("print();").unwrap_err();
    assert!(err.is_reported());
    let SessionError::Runtime(runtime) = err else {
        panic!("expected a runtime error");
    };
    assert!(matches!(
        runtime.kind,
        RuntimeErrorKind::NativeFailure { .. }
    ));
    assert!(!session
        .interpreter()
        .print_handler()
        .get_errors()
        .is_empty());
}

#[test]
fn session_survives_errors() {
    let mut session = buffered_session();
    assert!(session.feed_line("var x = 1;").is_ok());
    assert!(session.feed_line("x + true;").is_err());
    assert!(session.feed_line("var = ;").is_err());
    assert!(session.feed_line("print(x);").is_ok());
    assert_eq!(session.interpreter().print_handler().get_output(), "1\n");
}

#[test]
fn parse_errors_run_nothing() {
    let mut session = buffered_session();
    let err = session.feed_line("print(1); print(;").unwrap_err();
    assert!(matches!(err, SessionError::Parse(_)));
    assert_eq!(session.interpreter().print_handler().get_output(), "");
}

#[test]
fn closures_and_scopes() {
    let source = "
        fun make_adder(n) {
            fun add(x) { return x + n; }
            return add;
        }
        var add2 = make_adder(2);
        var n = 100;
        print(add2(1));
        { var n = 5; print(n); }
        print(n);
    ";
    assert_eq!(run_lines(&[source]), "3\n5\n100\n");
}

#[test]
fn short_circuit_skips_failing_operands() {
    assert_eq!(
        run_lines(&["print(false && undefined_name, true || undefined_name);"]),
        "false true\n"
    );
}

#[test]
fn deeply_nested_line_runs_and_is_freed() {
    let depth = 100_000;
    let source = format!("print({}1{});", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(run_lines(&[&source]), "1\n");
}
