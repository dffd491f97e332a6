//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::process::ExitCode;

use tscript_ir::ast::printer::print_program;
use tscript_parse::Parser;

use super::read_file;

/// Lex a file and print one token per line.
pub fn lex_file(path: &str) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    match tscript_lexer::lex(&source) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{:>4}:{:<3} {token}", token.line, token.column);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Parse a file, print the recovered statements, then every parse error.
pub fn parse_file(path: &str) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let tokens = match tscript_lexer::lex(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = Parser::new(&tokens).parse_program();
    print!("{}", print_program(&output.statements));

    if output.has_errors() {
        eprintln!("{} parse error(s):", output.errors.len());
        for error in &output.errors {
            eprintln!("  {error}");
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
