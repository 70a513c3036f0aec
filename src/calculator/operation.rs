//! Named operations and their results, for callers that pick the
//! operation at runtime (the CLI and the demo).

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::CalcError;

/// One of the four arithmetic operations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Result of applying an [`Operation`].
///
/// Integer operations keep their whole-number type so `5 + 3` prints as
/// `8`, while quotients always print with a fractional part (`5.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i32),
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
        }
    }
}

impl Operation {
    /// Infix symbol used when printing an expression.
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Apply the operation, rejecting a zero denominator.
    ///
    /// Integer operations require whole-number operands that fit in `i32`.
    pub fn apply(&self, a: f64, b: f64) -> Result<Value, CalcError> {
        let int_op: fn(i32, i32) -> i32 = match self {
            Operation::Add => super::add,
            Operation::Subtract => super::subtract,
            Operation::Multiply => super::multiply,
            Operation::Divide => return super::checked_divide(a, b).map(Value::Float),
        };
        let (a, b) = (self.integer_operand(a)?, self.integer_operand(b)?);
        Ok(Value::Int(int_op(a, b)))
    }

    /// Apply the operation with the sentinel policy for division.
    pub fn apply_lenient(
        &self,
        a: f64,
        b: f64,
        sink: &dyn super::DiagnosticSink,
    ) -> Result<Value, CalcError> {
        match self {
            Operation::Divide => Ok(Value::Float(super::divide_with(a, b, sink))),
            _ => self.apply(a, b),
        }
    }

    fn integer_operand(&self, value: f64) -> Result<i32, CalcError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(CalcError::NotAnInteger {
                operation: *self,
                value,
            });
        }
        if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return Err(CalcError::OutOfRange { value });
        }
        Ok(value as i32)
    }
}
