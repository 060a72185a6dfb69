//! Callback-based test runner
//!
//! A [`Runner`] is bound to one suite name. Creating it prints the suite
//! header; each [`Runner::test`] call runs one predicate synchronously and
//! prints its outcome. Dropping the runner (or calling [`Runner::finish`])
//! disposes of it.
//!
//! ## TestReporter Trait
//!
//! Rendering is separated from execution through the `TestReporter` trait.
//! [`ConsoleReporter`] produces the console format:
//!
//! ```text
//! Testing <suite>:
//!     <label>: PASS
//!     <label>: FAIL
//! ```
//!
//! ## Failure model
//!
//! A predicate returning `false` is the only failure the runner knows about.
//! A panic inside a predicate is not caught and unwinds through the runner.

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, warn};

// ============================================================================
// Callback contract
// ============================================================================

/// A zero-argument predicate: `true` means pass, `false` means fail.
///
/// Implemented for every `Fn() -> bool`, so plain functions and closures can
/// be handed to [`Runner::test`] directly.
pub trait TestCase {
    fn check(&self) -> bool;
}

impl<F> TestCase for F
where
    F: Fn() -> bool,
{
    fn check(&self) -> bool {
        self()
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// Result of running a single test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    /// Console spelling of the outcome (`PASS` / `FAIL`).
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
        }
    }
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed { Outcome::Pass } else { Outcome::Fail }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tally of outcomes recorded by one or more runners.
///
/// The console output never includes these counts; they only feed the
/// CLI's `--strict` exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Pass => self.passed += 1,
            Outcome::Fail => self.failed += 1,
        }
    }

    /// Fold another summary into this one.
    pub fn absorb(&mut self, other: RunSummary) {
        self.passed += other.passed;
        self.failed += other.failed;
    }
}

// ============================================================================
// Test Reporter Trait
// ============================================================================

/// Trait for rendering runner progress.
///
/// `on_test_start` is called before the predicate runs and
/// `on_test_complete` after it returns.
pub trait TestReporter {
    /// Called once when the runner is created
    fn on_suite_start(&mut self, suite: &str) -> io::Result<()>;

    /// Called before a test predicate runs
    fn on_test_start(&mut self, label: &str) -> io::Result<()>;

    /// Called after a test predicate returns
    fn on_test_complete(&mut self, label: &str, outcome: Outcome) -> io::Result<()>;
}

impl<R: TestReporter + ?Sized> TestReporter for &mut R {
    fn on_suite_start(&mut self, suite: &str) -> io::Result<()> {
        (**self).on_suite_start(suite)
    }

    fn on_test_start(&mut self, label: &str) -> io::Result<()> {
        (**self).on_test_start(label)
    }

    fn on_test_complete(&mut self, label: &str, outcome: Outcome) -> io::Result<()> {
        (**self).on_test_complete(label, outcome)
    }
}

/// Default console reporter.
///
/// Writes the plain-text format byte for byte, no colors, and flushes after
/// every write so the label is visible before the predicate runs.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TestReporter for ConsoleReporter<W> {
    fn on_suite_start(&mut self, suite: &str) -> io::Result<()> {
        writeln!(self.out, "Testing {}:", suite)?;
        self.out.flush()
    }

    fn on_test_start(&mut self, label: &str) -> io::Result<()> {
        write!(self.out, "    {}: ", label)?;
        self.out.flush()
    }

    fn on_test_complete(&mut self, _label: &str, outcome: Outcome) -> io::Result<()> {
        writeln!(self.out, "{}", outcome)?;
        self.out.flush()
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Test runner bound to a single suite.
///
/// Lifecycle is `Created -> Disposed`: the value is created by [`Runner::new`]
/// or [`Runner::with_reporter`] and disposed of when dropped or consumed by
/// [`Runner::finish`]. Ownership rules out use after disposal.
pub struct Runner<R: TestReporter = ConsoleReporter<io::Stdout>> {
    suite: String,
    reporter: R,
    summary: RunSummary,
}

impl Runner {
    /// Create a runner that prints to standard output.
    pub fn new(suite: impl Into<String>) -> Self {
        Self::with_reporter(suite, ConsoleReporter::stdout())
    }
}

impl<R: TestReporter> Runner<R> {
    /// Create a runner that renders through `reporter`, emitting the suite header immediately.
    pub fn with_reporter(suite: impl Into<String>, mut reporter: R) -> Self {
        let suite = suite.into();
        debug!(suite = %suite, "starting suite");
        report_io(reporter.on_suite_start(&suite));
        Self {
            suite,
            reporter,
            summary: RunSummary::default(),
        }
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Outcomes recorded so far.
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Run one labelled predicate and print its outcome.
    ///
    /// The label prefix is written before `callback` runs. Nothing is
    /// returned: the outcome is only visible in the rendered output.
    pub fn test(&mut self, label: &str, callback: impl TestCase) {
        report_io(self.reporter.on_test_start(label));

        let outcome = Outcome::from(callback.check());
        debug!(suite = %self.suite, label, %outcome, "test case finished");

        self.summary.record(outcome);
        report_io(self.reporter.on_test_complete(label, outcome));
    }

    /// Dispose of the runner and hand back its tally.
    pub fn finish(self) -> RunSummary {
        self.summary
    }
}

impl<R: TestReporter> Drop for Runner<R> {
    fn drop(&mut self) {
        debug!(
            suite = %self.suite,
            passed = self.summary.passed,
            failed = self.summary.failed,
            "suite finished"
        );
    }
}

/// Output failures are logged and otherwise ignored, like an unchecked `printf`.
pub(crate) fn report_io(result: io::Result<()>) {
    if let Err(e) = result {
        warn!(error = %e, "failed to write test output");
    }
}

// ============================================================================
// Tests
// ============================================================================
