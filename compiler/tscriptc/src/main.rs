//! T-Script CLI.

use std::process::ExitCode;

use tscriptc::commands::{lex_file, parse_file, print_usage, repl, run_file};
use tscriptc::tracing_setup::init_tracing;
use tscriptc::{Command, DriverConfig};

fn main() -> ExitCode {
    init_tracing();

    let config = match DriverConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Run 'tscript help' for usage.");
            return ExitCode::FAILURE;
        }
    };

    match &config.command {
        Command::Repl => repl(&config),
        Command::Run(path) => run_file(path, &config),
        Command::Lex(path) => lex_file(path),
        Command::Parse(path) => parse_file(path),
        Command::Help => {
            print_usage();
            ExitCode::SUCCESS
        }
    }
}
