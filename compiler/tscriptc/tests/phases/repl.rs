use pretty_assertions::assert_eq;
use tscriptc::commands::repl_loop;

use crate::buffered_session;

fn repl(input: &str, show_prompt: bool) -> (String, String, String) {
    let mut session = buffered_session();
    let mut prompt = Vec::new();
    let mut errors = Vec::new();
    repl_loop(
        &mut session,
        input.as_bytes(),
        &mut prompt,
        &mut errors,
        show_prompt,
    )
    .unwrap();
    (
        session.interpreter().print_handler().get_output(),
        String::from_utf8(prompt).unwrap(),
        String::from_utf8(errors).unwrap(),
    )
}

#[test]
fn lines_share_state() {
    let (output, _, errors) = repl("var x = 2;\nprint(x * 3);\n", false);
    assert_eq!(output, "6\n");
    assert_eq!(errors, "");
}

#[test]
fn front_end_errors_are_printed_and_the_loop_continues() {
    let (output, _, errors) = repl("var = 1;\n\"open\nprint(1);\n", false);
    assert_eq!(output, "1\n");
    let lines: Vec<&str> = errors.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Error: [line 1:4] parse error at '='"));
    assert!(lines[1].starts_with("Error: [line 1:0] lex error: unterminated string"));
}

#[test]
fn runtime_errors_are_left_to_the_interpreter() {
    let (output, _, errors) = repl("print(missing);\nprint(2);\n", false);
    assert_eq!(output, "2\n");
    assert_eq!(errors, "");
}

#[test]
fn prompt_is_shown_per_line() {
    let (_, prompt, _) = repl("1;\n\n2;\n", true);
    assert_eq!(prompt, "> > > > \n");
}
