#![forbid(unsafe_code)]
//! trialrun: a tiny callback-based unit-test runner
//!
//! A [`Runner`] prints a suite header, runs labelled boolean predicates one at
//! a time, and prints `PASS` or `FAIL` for each. The built-in suites exercise
//! the `trialrun_module` crate and ship as standalone executables as well as
//! through the `trialrun` CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Test predicates**: a panic inside a predicate is not caught by the runner and ends the process.

pub mod cli;
pub mod runner;
pub mod suites;
pub mod version;

pub use runner::{ConsoleReporter, Outcome, RunSummary, Runner, TestCase, TestReporter};
pub use suites::{CaseDef, HarnessError, SuiteDef};
