//! Four-function arithmetic.
//!
//! `add`, `subtract` and `multiply` are total over `i32` and wrap on
//! overflow. `divide` works on `f64` and follows a sentinel policy: a zero
//! denominator yields `0.0` plus a diagnostic line on stderr. Callers that
//! need to tell an undefined division apart from a genuine zero result
//! should use [`checked_divide`].

pub mod diagnostics;
pub mod operation;

use thiserror::Error;

pub use diagnostics::{DiagnosticSink, MemorySink, StderrSink};
pub use operation::{Operation, Value};

/// Errors reported by the non-sentinel entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{operation} expects whole-number operands, got {value}")]
    NotAnInteger { operation: Operation, value: f64 },

    #[error("operand {value} is outside the 32-bit integer range")]
    OutOfRange { value: f64 },
}

/// Add two integers.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Subtract `b` from `a`.
pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Multiply two integers.
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Divide `a` by `b`.
///
/// Returns `0.0` when `b` is zero and writes `Error: Division by zero` to
/// stderr. The sentinel is indistinguishable from a real zero quotient
/// (`divide(0.0, 5.0)` is also `0.0`); see [`checked_divide`].
pub fn divide(a: f64, b: f64) -> f64 {
    divide_with(a, b, &StderrSink)
}

/// [`divide`] with the diagnostic sent to `sink` instead of stderr.
pub fn divide_with(a: f64, b: f64, sink: &dyn DiagnosticSink) -> f64 {
    match checked_divide(a, b) {
        Ok(quotient) => quotient,
        Err(_) => {
            tracing::debug!(numerator = a, "substituting sentinel for division by zero");
            sink.notice(crate::constants::DIVISION_BY_ZERO_NOTICE);
            0.0
        }
    }
}

/// Divide `a` by `b`, reporting a zero denominator as an error.
pub fn checked_divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scenarios() {
        assert_eq!(add(5, 3), 8);
        assert_eq!(subtract(10, 4), 6);
        assert_eq!(multiply(6, 7), 42);
        assert_eq!(divide(15.0, 3.0), 5.0);
        assert_eq!(divide(7.0, 2.0), 3.5);
    }

    #[test]
    fn integer_ops_wrap_instead_of_panicking() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(subtract(i32::MIN, 1), i32::MAX);
        assert_eq!(multiply(i32::MAX, 2), -2);
    }

    #[test]
    fn divide_by_zero_returns_sentinel_and_notifies() {
        let sink = MemorySink::default();
        assert_eq!(divide_with(10.0, 0.0, &sink), 0.0);
        assert_eq!(sink.lines(), vec!["Error: Division by zero".to_string()]);
    }

    #[test]
    fn negative_zero_denominator_is_still_zero() {
        let sink = MemorySink::default();
        assert_eq!(divide_with(1.0, -0.0, &sink), 0.0);
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn genuine_zero_quotient_is_silent() {
        let sink = MemorySink::default();
        assert_eq!(divide_with(0.0, 5.0, &sink), 0.0);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn checked_divide_distinguishes_undefined_from_zero() {
        assert_eq!(checked_divide(0.0, 5.0), Ok(0.0));
        assert_eq!(checked_divide(10.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(checked_divide(-10.0, -2.0), Ok(5.0));
    }
}
