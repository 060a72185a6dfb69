//! Built-in test suites
//!
//! Each suite is a static table of labelled predicates over the module under
//! test. Running a suite creates a [`Runner`], runs every case in order, and
//! disposes of the runner.

use thiserror::Error;
use trialrun_module::add;

use crate::runner::{ConsoleReporter, RunSummary, Runner, TestReporter};

/// Errors raised while resolving suites by name
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HarnessError {
    #[error("unknown suite '{name}' (available: {available})")]
    UnknownSuite { name: String, available: String },
}

/// A labelled predicate known at build time.
#[derive(Debug, Clone, Copy)]
pub struct CaseDef {
    pub label: &'static str,
    pub check: fn() -> bool,
}

/// A named collection of test cases.
#[derive(Debug, Clone, Copy)]
pub struct SuiteDef {
    pub name: &'static str,
    pub cases: &'static [CaseDef],
}

impl SuiteDef {
    /// Run every case through a runner rendering to `reporter`.
    pub fn run<R: TestReporter>(&self, reporter: R) -> RunSummary {
        let mut runner = Runner::with_reporter(self.name, reporter);
        for case in self.cases {
            runner.test(case.label, case.check);
        }
        runner.finish()
    }

    /// Run the suite against standard output.
    pub fn run_to_stdout(&self) -> RunSummary {
        self.run(ConsoleReporter::stdout())
    }
}

fn test_module_add() -> bool {
    add(1, 2) == 3
}

pub const MODULE_SUITE: SuiteDef = SuiteDef {
    name: "module",
    cases: &[CaseDef {
        label: "1 + 2 should be 3",
        check: test_module_add,
    }],
};

pub const RULES_SUITE: SuiteDef = SuiteDef {
    name: "rules",
    cases: &[CaseDef {
        label: "1 + 2 should be 3",
        check: test_module_add,
    }],
};

/// Every built-in suite, in run order.
pub const SUITES: &[SuiteDef] = &[MODULE_SUITE, RULES_SUITE];

/// Look up a built-in suite by name.
pub fn find_suite(name: &str) -> Result<&'static SuiteDef, HarnessError> {
    SUITES
        .iter()
        .find(|suite| suite.name == name)
        .ok_or_else(|| HarnessError::UnknownSuite {
            name: name.to_string(),
            available: SUITES.iter().map(|s| s.name).collect::<Vec<_>>().join(", "),
        })
}
