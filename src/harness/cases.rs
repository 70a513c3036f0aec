//! The calculator suite: literal fixtures for every library operation.

use crate::calculator::{add, divide, multiply, subtract};

use super::assertions::{CheckResult, Checks};
use super::suite::{Suite, TestCase};

/// Build the calculator suite in its fixed execution order.
pub fn calculator_suite() -> Suite {
    Suite::new("Calculator Unit Tests")
        .group(
            "add",
            [
                TestCase::new("test_add_positive_numbers", add_positive_numbers),
                TestCase::new("test_add_negative_numbers", add_negative_numbers),
                TestCase::new("test_add_zero", add_zero),
                TestCase::new("test_add_table", add_table),
            ],
        )
        .group(
            "subtract",
            [
                TestCase::new("test_subtract_positive_numbers", subtract_positive_numbers),
                TestCase::new("test_subtract_negative_numbers", subtract_negative_numbers),
                TestCase::new("test_subtract_zero", subtract_zero),
                TestCase::new("test_subtract_larger_from_smaller", subtract_larger_from_smaller),
            ],
        )
        .group(
            "multiply",
            [
                TestCase::new("test_multiply_positive_numbers", multiply_positive_numbers),
                TestCase::new("test_multiply_negative_numbers", multiply_negative_numbers),
                TestCase::new("test_multiply_by_zero", multiply_by_zero),
                TestCase::new("test_multiply_by_one", multiply_by_one),
            ],
        )
        .group(
            "divide",
            [
                TestCase::new("test_divide_positive_numbers", divide_positive_numbers),
                TestCase::new("test_divide_with_float_result", divide_with_float_result),
                TestCase::new("test_divide_negative_numbers", divide_negative_numbers),
                TestCase::new("test_divide_by_zero", divide_by_zero),
                TestCase::new("test_divide_zero_by_number", divide_zero_by_number),
            ],
        )
}

// ── add ─────────────────────────────────────────────────────────────

fn add_positive_numbers(t: &mut Checks) -> CheckResult {
    t.int_eq(add(2, 3), 5)?;
    t.int_eq(add(10, 20), 30)
}

fn add_negative_numbers(t: &mut Checks) -> CheckResult {
    t.int_eq(add(-5, -3), -8)?;
    t.int_eq(add(-10, 10), 0)
}

fn add_zero(t: &mut Checks) -> CheckResult {
    t.int_eq(add(0, 0), 0)?;
    t.int_eq(add(5, 0), 5)?;
    t.int_eq(add(0, 5), 5)
}

const ADD_TABLE: [(i32, i32, i32); 4] = [(1, 1, 2), (100, 200, 300), (-50, 50, 0), (0, 0, 0)];

fn add_table(t: &mut Checks) -> CheckResult {
    for (a, b, expected) in ADD_TABLE {
        t.int_eq(add(a, b), expected)?;
    }
    Ok(())
}

// ── subtract ────────────────────────────────────────────────────────

fn subtract_positive_numbers(t: &mut Checks) -> CheckResult {
    t.int_eq(subtract(5, 3), 2)?;
    t.int_eq(subtract(10, 5), 5)
}

fn subtract_negative_numbers(t: &mut Checks) -> CheckResult {
    t.int_eq(subtract(-5, -3), -2)?;
    t.int_eq(subtract(5, -3), 8)
}

fn subtract_zero(t: &mut Checks) -> CheckResult {
    t.int_eq(subtract(5, 0), 5)?;
    t.int_eq(subtract(0, 5), -5)?;
    t.int_eq(subtract(0, 0), 0)
}

fn subtract_larger_from_smaller(t: &mut Checks) -> CheckResult {
    t.int_eq(subtract(3, 5), -2)?;
    t.int_eq(subtract(10, 20), -10)
}

// ── multiply ────────────────────────────────────────────────────────

fn multiply_positive_numbers(t: &mut Checks) -> CheckResult {
    t.int_eq(multiply(2, 3), 6)?;
    t.int_eq(multiply(5, 4), 20)
}

fn multiply_negative_numbers(t: &mut Checks) -> CheckResult {
    t.int_eq(multiply(-2, 3), -6)?;
    t.int_eq(multiply(-2, -3), 6)
}

fn multiply_by_zero(t: &mut Checks) -> CheckResult {
    t.int_eq(multiply(5, 0), 0)?;
    t.int_eq(multiply(0, 5), 0)?;
    t.int_eq(multiply(0, 0), 0)
}

fn multiply_by_one(t: &mut Checks) -> CheckResult {
    t.int_eq(multiply(5, 1), 5)?;
    t.int_eq(multiply(1, 5), 5)
}

// ── divide ──────────────────────────────────────────────────────────

fn divide_positive_numbers(t: &mut Checks) -> CheckResult {
    t.float_eq(divide(10.0, 2.0), 5.0)?;
    t.float_eq(divide(15.0, 3.0), 5.0)
}

fn divide_with_float_result(t: &mut Checks) -> CheckResult {
    t.float_eq(divide(7.0, 2.0), 3.5)?;
    t.float_eq(divide(5.0, 4.0), 1.25)
}

fn divide_negative_numbers(t: &mut Checks) -> CheckResult {
    t.float_eq(divide(-10.0, 2.0), -5.0)?;
    t.float_eq(divide(10.0, -2.0), -5.0)?;
    t.float_eq(divide(-10.0, -2.0), 5.0)
}

/// Sentinel result; also writes the division-by-zero notice to stderr.
fn divide_by_zero(t: &mut Checks) -> CheckResult {
    t.float_eq(divide(10.0, 0.0), 0.0)
}

fn divide_zero_by_number(t: &mut Checks) -> CheckResult {
    t.float_eq(divide(0.0, 5.0), 0.0)?;
    t.float_eq(divide(0.0, -5.0), 0.0)
}
