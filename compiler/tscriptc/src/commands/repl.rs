//! The interactive prompt.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use crate::{DriverConfig, Session};

const BANNER: &str = "T-Script REPL. Press Ctrl-D to exit.";
const PROMPT: &str = "> ";

/// Run the REPL on stdin until end of input.
pub fn repl(config: &DriverConfig) -> ExitCode {
    let mut session = Session::from_config(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    if !config.quiet {
        println!("{BANNER}");
    }
    match repl_loop(
        &mut session,
        stdin.lock(),
        &mut stdout,
        &mut stderr,
        !config.quiet,
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Feed each input line to `session`.
///
/// Errors are written to `errors` as `Error: <message>` and the loop
/// continues. Runtime errors are skipped here since the interpreter has
/// already reported them.
pub fn repl_loop(
    session: &mut Session,
    input: impl BufRead,
    prompt: &mut impl Write,
    errors: &mut impl Write,
    show_prompt: bool,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        if show_prompt {
            write!(prompt, "{PROMPT}")?;
            prompt.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = session.feed_line(&line) {
            if !e.is_reported() {
                writeln!(errors, "Error: {e}")?;
            }
        }
    }
    if show_prompt {
        writeln!(prompt)?;
    }
    Ok(())
}
