//! Command handlers for the `tscript` binary.
//!
//! Each handler returns the process exit code. Shared helpers live here.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::{repl, repl_loop};
pub use run::run_file;

/// Read a source file, turning I/O failures into a user-facing message.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

pub fn print_usage() {
    println!("T-Script interpreter");
    println!();
    println!("Usage: tscript [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl           Start the interactive prompt (default)");
    println!("  run <file>     Run a source file");
    println!("  lex <file>     Print the file's tokens");
    println!("  parse <file>   Print the file's syntax tree");
    println!("  help           Show this message");
    println!();
    println!("Options:");
    println!("  --max-call-depth=<n>   Limit nested function calls (default 10000)");
    println!("  -q, --quiet            No REPL banner or prompt");
    println!();
    println!("Set TSCRIPT_LOG (or RUST_LOG) to enable tracing, e.g. TSCRIPT_LOG=tscript_eval=debug");
}
