//! Command-line configuration.
//!
//! Arguments are parsed by hand: the first positional argument picks the
//! command, the second is its file path, and `--` options may appear
//! anywhere.

use thiserror::Error;
use tscript_eval::DEFAULT_MAX_CALL_DEPTH;

/// What the driver was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read-eval-print loop over stdin. The default.
    Repl,
    /// Run a source file.
    Run(String),
    /// Print a file's tokens.
    Lex(String),
    /// Print a file's AST and parse errors.
    Parse(String),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub command: Command,
    pub max_call_depth: usize,
    /// Suppress the REPL banner and prompt.
    pub quiet: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            command: Command::Repl,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            quiet: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid --max-call-depth value '{0}' (expected a positive integer)")]
    InvalidCallDepth(String),
    #[error("missing file path for '{command}'")]
    MissingPath { command: &'static str },
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

impl DriverConfig {
    /// Parse arguments, not including the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = DriverConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            let arg: String = arg.into();
            if let Some(value) = arg.strip_prefix("--max-call-depth=") {
                config.max_call_depth = match value.parse::<usize>() {
                    Ok(depth) if depth > 0 => depth,
                    _ => return Err(ConfigError::InvalidCallDepth(value.to_string())),
                };
            } else if arg == "--quiet" || arg == "-q" {
                config.quiet = true;
            } else if arg == "--help" || arg == "-h" {
                config.command = Command::Help;
                return Ok(config);
            } else if arg.starts_with('-') {
                return Err(ConfigError::UnknownOption(arg));
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        let Some(command) = positional.next() else {
            return Ok(config);
        };
        let command = match command.as_str() {
            "repl" => Command::Repl,
            "help" => Command::Help,
            "run" => Command::Run(path_for(&mut positional, "run")?),
            "lex" => Command::Lex(path_for(&mut positional, "lex")?),
            "parse" => Command::Parse(path_for(&mut positional, "parse")?),
            _ => return Err(ConfigError::UnknownCommand(command)),
        };
        if let Some(extra) = positional.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }
        config.command = command;
        Ok(config)
    }
}

fn path_for(
    positional: &mut impl Iterator<Item = String>,
    command: &'static str,
) -> Result<String, ConfigError> {
    positional
        .next()
        .ok_or(ConfigError::MissingPath { command })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "tests unwrap known-good arguments")]

    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Result<DriverConfig, ConfigError> {
        DriverConfig::from_args(args.iter().copied())
    }

    #[test]
    fn no_arguments_starts_the_repl() {
        assert_eq!(parse(&[]).unwrap(), DriverConfig::default());
    }

    #[test]
    fn commands_take_a_path() {
        assert_eq!(
            parse(&["run", "main.ts"]).unwrap().command,
            Command::Run("main.ts".to_string())
        );
        assert_eq!(
            parse(&["lex", "a.ts"]).unwrap().command,
            Command::Lex("a.ts".to_string())
        );
        assert_eq!(
            parse(&["parse", "a.ts"]).unwrap().command,
            Command::Parse("a.ts".to_string())
        );
        assert_eq!(
            parse(&["run"]).unwrap_err(),
            ConfigError::MissingPath { command: "run" }
        );
    }

    #[test]
    fn options_may_appear_anywhere() {
        let config = parse(&["--quiet", "run", "main.ts", "--max-call-depth=64"]).unwrap();
        assert!(config.quiet);
        assert_eq!(config.max_call_depth, 64);
        assert_eq!(config.command, Command::Run("main.ts".to_string()));
    }

    #[test]
    fn invalid_call_depth() {
        assert_eq!(
            parse(&["--max-call-depth=0"]).unwrap_err(),
            ConfigError::InvalidCallDepth("0".to_string())
        );
        assert_eq!(
            parse(&["--max-call-depth=lots"]).unwrap_err(),
            ConfigError::InvalidCallDepth("lots".to_string())
        );
    }

    #[test]
    fn unknown_input_is_rejected() {
        assert_eq!(
            parse(&["compile"]).unwrap_err(),
            ConfigError::UnknownCommand("compile".to_string())
        );
        assert_eq!(
            parse(&["--fast"]).unwrap_err(),
            ConfigError::UnknownOption("--fast".to_string())
        );
        assert_eq!(
            parse(&["run", "a.ts", "b.ts"]).unwrap_err(),
            ConfigError::UnexpectedArgument("b.ts".to_string())
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["run", "--help"]).unwrap().command, Command::Help);
        assert_eq!(parse(&["help"]).unwrap().command, Command::Help);
    }
}
