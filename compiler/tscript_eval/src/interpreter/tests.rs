#![allow(clippy::unwrap_used, reason = "tests unwrap known-good programs")]

use pretty_assertions::assert_eq;

use super::*;
use crate::{buffer_handler, RuntimeErrorKind};

fn statements(source: &str) -> Vec<Stmt> {
    let tokens = tscript_lexer::lex(source).unwrap();
    tscript_parse::parse(&tokens).unwrap()
}

fn interpreter() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
}

/// Run `source` on a fresh interpreter and return what it printed.
fn output(source: &str) -> String {
    let mut interpreter = interpreter();
    if let Err(e) = interpreter.interpret(&statements(source)) {
        panic!("{source:?} failed: {e}");
    }
    interpreter.print_handler().get_output()
}

fn runtime_error(source: &str) -> RuntimeError {
    let mut interpreter = interpreter();
    match interpreter.interpret(&statements(source)) {
        Ok(()) => panic!("expected a runtime error from {source:?}"),
        Err(e) => e,
    }
}

#[test]
fn arithmetic_follows_precedence() {
    assert_eq!(output("print(2 + 3 * 4);"), "14\n");
    assert_eq!(output("print((2 + 3) * 4);"), "20\n");
    assert_eq!(output("print(10 - 4 - 3);"), "3\n");
}

#[test]
fn bitwise_and_binds_tighter_than_or() {
    assert_eq!(output("print(5 & 3 | 2);"), "3\n");
}

#[test]
fn expression_statement_without_print_has_no_output() {
    assert_eq!(output("2 + 3;"), "");
}

#[test]
fn number_display() {
    assert_eq!(output("print(1 / 0);"), "Infinity\n");
    assert_eq!(output("print(10 / 4);"), "2.5\n");
    assert_eq!(output("print(-0);"), "0\n");
    assert_eq!(output("print(1000000000 * 1000000000000);"), "1e+21\n");
    assert_eq!(output("print(1 / 10000000);"), "1e-7\n");
}

#[test]
fn print_joins_arguments_with_spaces() {
    assert_eq!(
        output(r#"print(1, "two", true, null);"#),
        "1 two true null\n"
    );
}

#[test]
fn print_without_arguments_fails() {
    let mut interpreter = interpreter();
    let err = interpreter.interpret(&statements("print();")).unwrap_err();
    assert_eq!(
        err.kind,
        RuntimeErrorKind::NativeFailure {
            message: "print expects at least one argument".to_string()
        }
    );
    assert_eq!(
        interpreter.print_handler().get_errors(),
        "[line 1] runtime error: print expects at least one argument\n"
    );
}

#[test]
fn string_concatenation() {
    assert_eq!(output(r#"print("a" + "b");"#), "ab\n");
}

#[test]
fn no_implicit_coercion_on_plus() {
    let err = runtime_error("5 + true;");
    assert_eq!(err.kind, RuntimeErrorKind::OperandsMustBeNumbersOrStrings);
    assert_eq!(err.token.kind, tscript_ir::TokenKind::Plus);
}

#[test]
fn runtime_error_abandons_remaining_statements() {
    let mut interpreter = interpreter();
    let result = interpreter.interpret(&statements("print(1); print(5 + true); print(2);"));
    assert!(result.is_err());
    assert_eq!(interpreter.print_handler().get_output(), "1\n");
}

#[test]
fn runtime_error_display_names_the_line() {
    let err = runtime_error("var a = 1;\nprint(b);");
    assert_eq!(
        err.kind,
        RuntimeErrorKind::UndefinedVariable {
            name: "b".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "[line 2] runtime error: undefined variable 'b'"
    );
}

#[test]
fn postfix_yields_old_value() {
    assert_eq!(output("var x = 1; print(x++); print(x);"), "1\n2\n");
    assert_eq!(output("var x = 1; print(x--); print(x);"), "1\n0\n");
}

#[test]
fn prefix_yields_new_value() {
    assert_eq!(output("var x = 1; print(++x); print(x);"), "2\n2\n");
    assert_eq!(output("var x = 1; print(--x); print(x);"), "0\n0\n");
}

#[test]
fn increment_requires_a_number() {
    let err = runtime_error(r#"var s = "a"; s++;"#);
    assert_eq!(err.kind, RuntimeErrorKind::OperandMustBeNumber);
}

#[test]
fn uninitialized_var_is_null() {
    assert_eq!(output("var x; print(x);"), "null\n");
}

#[test]
fn assignment_yields_assigned_value() {
    assert_eq!(output("var a; var b; a = b = 3; print(a, b);"), "3 3\n");
}

#[test]
fn assignment_to_undefined_fails() {
    let err = runtime_error("y = 1;");
    assert_eq!(
        err.kind,
        RuntimeErrorKind::UndefinedVariable {
            name: "y".to_string()
        }
    );
}

#[test]
fn function_call_returns_value() {
    assert_eq!(
        output("fun add(a, b) { return a + b; } print(add(1, 2));"),
        "3\n"
    );
}

#[test]
fn function_without_return_yields_null() {
    assert_eq!(output("fun f() { 1; } print(f());"), "null\n");
}

#[test]
fn recursion() {
    let source = "
        fun fib(n) { return n < 2 ? n : fib(n - 1) + fib(n - 2); }
        print(fib(10));
    ";
    assert_eq!(output(source), "55\n");
}

#[test]
fn return_unwinds_out_of_loops() {
    let source = "
        fun first_over(limit) {
            var i = 0;
            while (true) {
                if (i > limit) return i;
                i = i + 1;
            }
        }
        print(first_over(3));
    ";
    assert_eq!(output(source), "4\n");
}

#[test]
fn closure_outlives_defining_call() {
    let source = "
        fun make_counter() {
            var i = 0;
            fun count() { i = i + 1; return i; }
            return count;
        }
        var c = make_counter();
        print(c());
        print(c());
    ";
    assert_eq!(output(source), "1\n2\n");
}

#[test]
fn closures_share_their_scope() {
    let source = "
        var get;
        var set;
        fun make() {
            var v = 1;
            fun g() { return v; }
            fun s(x) { v = x; }
            get = g;
            set = s;
        }
        make();
        set(7);
        print(get());
    ";
    assert_eq!(output(source), "7\n");
}

#[test]
fn calls_run_in_the_closure_not_the_caller() {
    let source = "
        var x = \"global\";
        fun show() { print(x); }
        fun caller() { var x = \"local\"; show(); }
        caller();
    ";
    assert_eq!(output(source), "global\n");
}

#[test]
fn block_scoping() {
    assert_eq!(
        output("var a = 1; { var a = 2; print(a); } print(a);"),
        "2\n1\n"
    );
    assert_eq!(output("var a = 1; { a = 2; } print(a);"), "2\n");
}

#[test]
fn block_locals_are_gone_after_the_block() {
    let err = runtime_error("{ var b = 1; } print(b);");
    assert_eq!(
        err.kind,
        RuntimeErrorKind::UndefinedVariable {
            name: "b".to_string()
        }
    );
}

#[test]
fn logical_operators_short_circuit() {
    assert_eq!(
        output("print(false && missing); print(true || missing);"),
        "false\ntrue\n"
    );
}

#[test]
fn logical_operators_yield_operand_values() {
    assert_eq!(
        output(r#"print(null || "x"); print(1 && 2); print(0 || 5);"#),
        "x\n2\n0\n"
    );
}

#[test]
fn ternary_evaluates_one_branch() {
    assert_eq!(output("print(true ? 1 : missing);"), "1\n");
    assert_eq!(output("print(null ? missing : 2);"), "2\n");
}

#[test]
fn truthiness_of_zero_and_empty_string() {
    assert_eq!(
        output(r#"if (0) print("zero"); if ("") print("empty");"#),
        "zero\nempty\n"
    );
}

#[test]
fn if_else() {
    assert_eq!(output("if (1 > 2) print(1); else print(2);"), "2\n");
}

#[test]
fn while_and_for_loops() {
    assert_eq!(
        output("var i = 0; while (i < 3) { print(i); i = i + 1; }"),
        "0\n1\n2\n"
    );
    assert_eq!(output("for (var i = 0; i < 3; i++) print(i);"), "0\n1\n2\n");
}

#[test]
fn for_loop_variable_is_scoped_to_the_loop() {
    let err = runtime_error("for (var i = 0; i < 1; i++) {} print(i);");
    assert_eq!(
        err.kind,
        RuntimeErrorKind::UndefinedVariable {
            name: "i".to_string()
        }
    );
}

#[test]
fn equality() {
    assert_eq!(
        output(r#"print(null == null, 1 == 1, "a" == "a", null == false, 1 != 2);"#),
        "true true true false true\n"
    );
    assert_eq!(output("fun f() {} var g = f; print(f == g);"), "true\n");
}

#[test]
fn callables_display() {
    assert_eq!(
        output("fun f() {} print(f); print(print);"),
        "<fn f>\n<native fn print>\n"
    );
}

#[test]
fn calling_a_non_function_fails() {
    let err = runtime_error("var x = 1; x();");
    assert_eq!(err.kind, RuntimeErrorKind::NotCallable);
}

#[test]
fn arguments_are_evaluated_before_the_callable_check() {
    let err = runtime_error("var x = 1; x(missing);");
    assert_eq!(
        err.kind,
        RuntimeErrorKind::UndefinedVariable {
            name: "missing".to_string()
        }
    );
}

#[test]
fn arity_mismatch() {
    let err = runtime_error("fun f(a) {} f(1, 2);");
    assert_eq!(
        err.kind,
        RuntimeErrorKind::ArityMismatch {
            expected: 1,
            got: 2
        }
    );
    assert_eq!(err.token.kind, tscript_ir::TokenKind::RightParen);
}

#[test]
fn call_depth_is_limited() {
    let mut interpreter = InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .max_call_depth(50)
        .build();
    let err = interpreter
        .interpret(&statements("fun f(n) { return f(n + 1); } f(0);"))
        .unwrap_err();
    assert_eq!(err.kind, RuntimeErrorKind::CallDepthExceeded { limit: 50 });

    // The failed call chain left no scope or depth behind.
    assert!(interpreter.environment().ptr_eq(interpreter.globals()));
    interpreter
        .interpret(&statements("fun g(n) { return n < 40 ? g(n + 1) : n; } print(g(0));"))
        .unwrap();
    assert_eq!(interpreter.print_handler().get_output(), "40\n");
}

#[test]
fn globals_persist_across_interpret_calls() {
    let mut interpreter = interpreter();
    interpreter.interpret(&statements("var x = 41;")).unwrap();
    interpreter.interpret(&statements("x++; print(x);")).unwrap();
    assert_eq!(interpreter.print_handler().get_output(), "42\n");
}

#[test]
fn error_inside_block_restores_global_scope() {
    let mut interpreter = interpreter();
    let result = interpreter.interpret(&statements("{ var inner = 1; missing; }"));
    assert!(result.is_err());
    assert!(interpreter.environment().ptr_eq(interpreter.globals()));
    assert!(interpreter.globals().lookup("inner").is_none());
}

#[test]
fn top_level_return_stops_the_program() {
    assert_eq!(output("print(1); return; print(2);"), "1\n");
}

#[test]
fn host_defined_globals_are_visible() {
    let mut interpreter = interpreter();
    interpreter.globals().define("answer", Value::Number(42.0));
    interpreter.interpret(&statements("print(answer);")).unwrap();
    assert_eq!(interpreter.print_handler().get_output(), "42\n");
}

#[test]
fn each_interpreter_has_its_own_globals() {
    let mut first = interpreter();
    first.interpret(&statements("var only_here = 1;")).unwrap();
    let second = interpreter();
    assert!(second.globals().lookup("only_here").is_none());
    assert!(second.globals().lookup("print").is_some());
}

#[test]
fn scoped_guard_restores_environment() {
    let mut interpreter = interpreter();
    let inner = Environment::with_enclosing(interpreter.globals());
    {
        let scoped = interpreter.scoped(inner.clone());
        assert!(scoped.environment().ptr_eq(&inner));
    }
    assert!(interpreter.environment().ptr_eq(interpreter.globals()));
}

#[test]
fn deep_expression_nesting_evaluates() {
    let depth = 2_000;
    let source = format!("print({}1{});", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(output(&source), "1\n");
}
