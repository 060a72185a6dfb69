//! Golden transcript tests
//!
//! These render suites into an in-memory buffer and compare the console
//! output against inline snapshots, so any change to the output format has to
//! be reviewed.
//!
//! Review changes: `cargo insta review`

use trialrun::suites::{MODULE_SUITE, RULES_SUITE};
use trialrun::{ConsoleReporter, Runner, SuiteDef};
use trialrun_module::add;

fn render_suite(suite: &SuiteDef) -> String {
    let mut buf = Vec::new();
    suite.run(ConsoleReporter::new(&mut buf));
    String::from_utf8(buf).expect("transcript was not UTF-8")
}

#[test]
fn test_module_suite_transcript() {
    insta::assert_snapshot!(render_suite(&MODULE_SUITE), @r"
Testing module:
    1 + 2 should be 3: PASS
");
}

#[test]
fn test_rules_suite_transcript() {
    insta::assert_snapshot!(render_suite(&RULES_SUITE), @r"
Testing rules:
    1 + 2 should be 3: PASS
");
}

#[test]
fn test_mixed_outcomes_transcript() {
    let mut buf = Vec::new();
    {
        let mut runner = Runner::with_reporter("module", ConsoleReporter::new(&mut buf));
        runner.test("1 + 2 should be 3", || add(1, 2) == 3);
        runner.test("1 + 2 should be 4", || add(1, 2) == 4);
        runner.test("max + 1 wraps to min", || add(i32::MAX, 1) == i32::MIN);
    }
    let transcript = String::from_utf8(buf).expect("transcript was not UTF-8");

    insta::assert_snapshot!(transcript, @r"
Testing module:
    1 + 2 should be 3: PASS
    1 + 2 should be 4: FAIL
    max + 1 wraps to min: PASS
");
}
