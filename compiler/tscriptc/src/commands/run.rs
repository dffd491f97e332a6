//! The `run` command.

use std::process::ExitCode;

use super::read_file;
use crate::{DriverConfig, Session};

/// Run a whole file as one program. Any error fails the process.
pub fn run_file(path: &str, config: &DriverConfig) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::from_config(config);
    match session.feed_line(&source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is_reported() {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
