//! Calculator demo: evaluates a fixed list of expressions and prints them.

use std::fmt;

use crate::calculator::{CalcError, DiagnosticSink, Operation, Value};

/// A binary expression over one of the library operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub operation: Operation,
    pub lhs: f64,
    pub rhs: f64,
}

impl Expression {
    pub const fn new(operation: Operation, lhs: f64, rhs: f64) -> Self {
        Self { operation, lhs, rhs }
    }

    /// Evaluate with the sentinel policy for division.
    pub fn evaluate(&self, sink: &dyn DiagnosticSink) -> Result<Value, CalcError> {
        self.operation.apply_lenient(self.lhs, self.rhs, sink)
    }

    /// Evaluate, failing on a zero denominator.
    pub fn evaluate_strict(&self) -> Result<Value, CalcError> {
        self.operation.apply(self.lhs, self.rhs)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operation.symbol(), self.rhs)
    }
}

/// Expressions shown by `calckit demo`, in order.
pub const SCENARIOS: [Expression; 5] = [
    Expression::new(Operation::Add, 5.0, 3.0),
    Expression::new(Operation::Subtract, 10.0, 4.0),
    Expression::new(Operation::Multiply, 6.0, 7.0),
    Expression::new(Operation::Divide, 15.0, 3.0),
    Expression::new(Operation::Divide, 7.0, 2.0),
];

/// Render the demo listing.
pub fn render(sink: &dyn DiagnosticSink) -> Result<String, CalcError> {
    let mut output = String::from("Simple Calculator Demo\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    for expr in &SCENARIOS {
        output.push_str(&format!("{expr} = {}\n", expr.evaluate(sink)?));
    }
    Ok(output)
}
