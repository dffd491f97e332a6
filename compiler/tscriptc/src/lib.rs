//! T-Script driver.
//!
//! A [`Session`] owns one interpreter and feeds it source text through the
//! lex, parse and interpret phases. Globals persist across
//! [`Session::feed_line`] calls, which is what the REPL relies on.
//!
//! The `tscript` binary is a thin layer over [`commands`].

pub mod commands;
pub mod config;
mod session;
pub mod tracing_setup;

pub use config::{Command, ConfigError, DriverConfig};
pub use session::{lex_source, parse_source, Session, SessionError};
