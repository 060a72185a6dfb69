//! CLI module for the trialrun harness
//!
//! ## Commands
//!
//! - `list` - Print the built-in suite names
//! - `run [SUITE]...` - Run built-in suites (all when none are named)
//! - `check <A> <B> <EXPECTED>` - Run one ad-hoc addition case
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.
//!
//! Failing cases do not change the exit code unless `--strict` is given.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::io;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::version::TRIALRUN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<crate::suites::HarnessError> for CliError {
    fn from(e: crate::suites::HarnessError) -> Self {
        CliError::failure(format!("Error: {}", e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// A tiny callback-based unit-test runner
#[derive(Parser, Debug)]
#[command(name = "trialrun")]
#[command(version = TRIALRUN_VERSION)]
#[command(about = "A tiny callback-based unit-test runner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List built-in suites
    List,

    /// Run built-in suites
    Run {
        /// Suites to run, in order (default: all)
        #[arg(value_name = "SUITE")]
        suites: Vec<String>,
        /// Exit non-zero if any case fails
        #[arg(long)]
        strict: bool,
    },

    /// Check that A + B equals EXPECTED
    Check {
        #[arg(value_name = "A", allow_negative_numbers = true)]
        a: i32,
        #[arg(value_name = "B", allow_negative_numbers = true)]
        b: i32,
        #[arg(value_name = "EXPECTED", allow_negative_numbers = true)]
        expected: i32,
        /// Exit non-zero if the case fails
        #[arg(long)]
        strict: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Install the tracing subscriber shared by every binary.
///
/// Logs go to stderr so stdout carries only test output. The filter comes
/// from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::List => commands::list_suites(),
        Command::Run { suites, strict } => commands::run_suites(&suites, strict),
        Command::Check { a, b, expected, strict } => commands::check_sum(a, b, expected, strict),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::try_parse_from(["trialrun", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
    }

    #[test]
    fn test_cli_parse_run_defaults() {
        let cli = Cli::try_parse_from(["trialrun", "run"]).unwrap();
        if let Command::Run { suites, strict } = cli.command {
            assert!(suites.is_empty());
            assert!(!strict);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_parse_run_named_strict() {
        let cli = Cli::try_parse_from(["trialrun", "run", "rules", "module", "--strict"]).unwrap();
        if let Command::Run { suites, strict } = cli.command {
            assert_eq!(suites, vec!["rules", "module"]);
            assert!(strict);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_parse_check_negative() {
        let cli = Cli::try_parse_from(["trialrun", "check", "-1", "2", "1"]).unwrap();
        if let Command::Check { a, b, expected, strict } = cli.command {
            assert_eq!((a, b, expected), (-1, 2, 1));
            assert!(!strict);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_rejects_non_integer_operands() {
        assert!(Cli::try_parse_from(["trialrun", "check", "one", "2", "3"]).is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["trialrun"]).is_err());
    }

    #[test]
    fn test_harness_error_becomes_failure() {
        let err = CliError::from(crate::suites::find_suite("missing").unwrap_err());
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("Error: unknown suite 'missing'"));
    }
}
