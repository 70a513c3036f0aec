//! Integration tests for whole harness runs: counters, policies and the
//! exit contract.

use calckit::calculator::{Value, divide};
use calckit::harness::{CheckResult, Checks, FailurePolicy, Runner, Suite, TestCase, calculator_suite};
use calckit::models::{CaseState, RunSummary};
use calckit::output::OutputFormat;

// ---------------------------------------------------------------------------
// Calculator suite
// ---------------------------------------------------------------------------

#[test]
fn full_suite_passes_with_exit_code_zero() {
    let suite = calculator_suite();
    let report = Runner::default().run(&suite);

    assert_eq!(report.summary.total, suite.len());
    assert_eq!(report.summary.passed, suite.len());
    assert_eq!(report.summary.failed, 0);
    assert_eq!(report.summary.exit_code(), 0);
}

#[test]
fn full_suite_passes_under_either_policy() {
    for policy in [FailurePolicy::StopOnFirst, FailurePolicy::CollectAll] {
        let report = Runner::new(policy).run(&calculator_suite());
        assert!(report.summary.is_success(), "{policy} run failed");
        assert_eq!(report.policy, policy);
    }
}

#[test]
fn divide_by_zero_case_records_sentinel_as_pass() {
    let report = Runner::default().run(&calculator_suite());
    let case = report
        .cases()
        .find(|c| c.name == "test_divide_by_zero")
        .unwrap();
    assert_eq!(case.state, CaseState::Passed);
    assert_eq!(case.assertions, 1);
}

// ---------------------------------------------------------------------------
// Intentional failures
// ---------------------------------------------------------------------------

fn wrong_quotient_then_wrong_sum(t: &mut Checks) -> CheckResult {
    t.float_eq(divide(7.0, 2.0), 3.0)?;
    t.int_eq(calckit::add(2, 2), 5)?;
    t.int_eq(calckit::add(2, 2), 4)
}

fn sentinel_is_not_infinity(t: &mut Checks) -> CheckResult {
    t.float_eq(divide(1.0, 0.0), f64::INFINITY)
}

fn broken_suite() -> Suite {
    calculator_suite().group(
        "broken",
        [
            TestCase::new("test_wrong_expectations", wrong_quotient_then_wrong_sum),
            TestCase::new("test_sentinel_is_not_infinity", sentinel_is_not_infinity),
        ],
    )
}

#[test]
fn failures_flip_the_exit_code() {
    let report = Runner::default().run(&broken_suite());
    assert_eq!(
        report.summary,
        RunSummary {
            total: 19,
            passed: 17,
            failed: 2
        }
    );
    assert_eq!(report.summary.exit_code(), 1);
}

#[test]
fn stop_on_first_hides_later_failures() {
    let report = Runner::new(FailurePolicy::StopOnFirst).run(&broken_suite());
    let case = report
        .cases()
        .find(|c| c.name == "test_wrong_expectations")
        .unwrap();
    assert_eq!(case.assertions, 1);
    assert_eq!(case.failures.len(), 1);
    assert_eq!(case.failures[0].expected, Value::Float(3.0));
    assert_eq!(case.failures[0].actual, Value::Float(3.5));
    assert!(case.failures[0].file.ends_with("harness_run.rs"));
}

#[test]
fn collect_all_reports_every_failure() {
    let report = Runner::new(FailurePolicy::CollectAll).run(&broken_suite());
    let case = report
        .cases()
        .find(|c| c.name == "test_wrong_expectations")
        .unwrap();
    assert_eq!(case.assertions, 3);
    assert_eq!(case.failures.len(), 2);
    assert_eq!(case.failures[1].expected, Value::Int(5));
    assert_eq!(case.failures[1].actual, Value::Int(4));
    assert!(case.failures[0].line < case.failures[1].line);

    // Counters are per case, not per assertion.
    assert_eq!(report.summary.failed, 2);
}

#[test]
fn failed_report_renders_details() {
    let report = Runner::default().run(&broken_suite());
    let output = OutputFormat::Terminal.render(&report);
    assert!(output.contains("Testing broken function:"));
    assert!(output.contains("Running test_wrong_expectations... "));
    assert!(output.contains("  Expected: 3.000000, Got: 3.500000\n"));
    assert!(output.contains("harness_run.rs, Line: "));
    assert!(output.contains("Failed: 2"));
    assert!(output.contains("Some tests failed!"));

    let json: serde_json::Value = serde_json::from_str(&OutputFormat::Json.render(&report)).unwrap();
    assert_eq!(json["summary"]["failed"], 2);
}
