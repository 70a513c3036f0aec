//! Assertion helpers handed to each test case.
//!
//! Every failure records expected vs actual and the source location of
//! the failing assertion. What happens after a failure depends on the
//! [`FailurePolicy`]: with `StopOnFirst` the assertion returns `Err` and
//! the case body bails out through `?`; with `CollectAll` the failure is
//! stored and the body keeps going.

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

use crate::calculator::Value;
use crate::constants::FLOAT_TOLERANCE;
use crate::harness::FailurePolicy;

/// A single failed assertion.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("expected {expected}, got {actual} ({file}:{line})")]
pub struct AssertionFailure {
    pub expected: Value,
    pub actual: Value,
    pub file: String,
    pub line: u32,
}

/// Result type returned by assertions and case bodies.
pub type CheckResult = Result<(), AssertionFailure>;

/// Assertion state for one running test case.
#[derive(Debug)]
pub struct Checks {
    policy: FailurePolicy,
    evaluated: usize,
    failures: Vec<AssertionFailure>,
}

impl Checks {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            policy,
            evaluated: 0,
            failures: Vec::new(),
        }
    }

    /// Assert exact integer equality.
    #[track_caller]
    pub fn int_eq(&mut self, actual: i32, expected: i32) -> CheckResult {
        self.check(
            actual == expected,
            Value::Int(expected),
            Value::Int(actual),
            Location::caller(),
        )
    }

    /// Assert that `actual` is within [`FLOAT_TOLERANCE`] of `expected`.
    ///
    /// NaN never compares equal to anything, including NaN.
    #[track_caller]
    pub fn float_eq(&mut self, actual: f64, expected: f64) -> CheckResult {
        self.check(
            (actual - expected).abs() <= FLOAT_TOLERANCE,
            Value::Float(expected),
            Value::Float(actual),
            Location::caller(),
        )
    }

    /// Number of assertions evaluated so far.
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    /// Consume the checks together with the case body's result, returning
    /// every failure in the order it occurred.
    pub fn finish(self, result: CheckResult) -> Vec<AssertionFailure> {
        let mut failures = self.failures;
        if let Err(failure) = result {
            failures.push(failure);
        }
        failures
    }

    fn check(
        &mut self,
        passed: bool,
        expected: Value,
        actual: Value,
        location: &'static Location<'static>,
    ) -> CheckResult {
        self.evaluated += 1;
        if passed {
            return Ok(());
        }

        let failure = AssertionFailure {
            expected,
            actual,
            file: location.file().to_string(),
            line: location.line(),
        };
        match self.policy {
            FailurePolicy::StopOnFirst => Err(failure),
            FailurePolicy::CollectAll => {
                self.failures.push(failure);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_eq_passes_and_counts() {
        let mut checks = Checks::new(FailurePolicy::StopOnFirst);
        assert!(checks.int_eq(8, 8).is_ok());
        assert!(checks.int_eq(-2, -2).is_ok());
        assert_eq!(checks.evaluated(), 2);
        assert!(checks.finish(Ok(())).is_empty());
    }

    #[test]
    fn failure_records_caller_location() {
        let mut checks = Checks::new(FailurePolicy::StopOnFirst);
        let line = line!() + 1;
        let failure = checks.int_eq(6, 5).unwrap_err();
        assert_eq!(failure.expected, Value::Int(5));
        assert_eq!(failure.actual, Value::Int(6));
        assert_eq!(failure.line, line);
        assert!(failure.file.ends_with("assertions.rs"), "got {}", failure.file);
    }

    #[test]
    fn float_eq_respects_tolerance() {
        let mut checks = Checks::new(FailurePolicy::StopOnFirst);
        assert!(checks.float_eq(5.00005, 5.0).is_ok());
        assert!(checks.float_eq(4.99995, 5.0).is_ok());
        assert!(checks.float_eq(5.001, 5.0).is_err());
    }

    #[test]
    fn float_eq_rejects_nan() {
        let mut checks = Checks::new(FailurePolicy::StopOnFirst);
        assert!(checks.float_eq(f64::NAN, 0.0).is_err());
        assert!(checks.float_eq(f64::NAN, f64::NAN).is_err());
    }

    #[test]
    fn collect_all_keeps_going() {
        let mut checks = Checks::new(FailurePolicy::CollectAll);
        assert!(checks.int_eq(1, 2).is_ok());
        assert!(checks.float_eq(1.0, 2.0).is_ok());
        assert!(checks.int_eq(3, 3).is_ok());
        assert_eq!(checks.evaluated(), 3);
        let failures = checks.finish(Ok(()));
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].expected, Value::Int(2));
        assert_eq!(failures[1].expected, Value::Float(2.0));
    }

    #[test]
    fn finish_appends_returned_failure() {
        let mut checks = Checks::new(FailurePolicy::StopOnFirst);
        let result = checks.int_eq(0, 1);
        let failures = checks.finish(result);
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn failure_display_names_location() {
        let failure = AssertionFailure {
            expected: Value::Int(5),
            actual: Value::Int(6),
            file: "cases.rs".into(),
            line: 12,
        };
        assert_eq!(failure.to_string(), "expected 5, got 6 (cases.rs:12)");
    }
}
