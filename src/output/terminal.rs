//! Terminal renderer: the fixed-format, colourised test report.

use colored::Colorize;

use crate::calculator::Value;
use crate::harness::AssertionFailure;
use crate::models::{CaseRecord, RunReport};
use crate::output::RunRenderer;

const RULE: &str = "========================================";

/// Plain-text report with green/red pass and fail markers.
pub struct TerminalRenderer;

impl RunRenderer for TerminalRenderer {
    fn render(&self, report: &RunReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{RULE}\n   {}\n{RULE}\n\n", report.suite));

        for (i, group) in report.groups.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&format!("Testing {} function:\n", group.function));
            for case in &group.cases {
                render_case(&mut output, case);
            }
        }

        let summary = &report.summary;
        output.push_str(&format!("\n{RULE}\nTest Results:\n"));
        output.push_str(&format!("  Total:  {}\n", summary.total));
        output.push_str(&format!("  {}\n", format!("Passed: {}", summary.passed).green()));
        if summary.failed > 0 {
            output.push_str(&format!("  {}\n", format!("Failed: {}", summary.failed).red()));
        }
        output.push_str(&format!("{RULE}\n\n"));

        if summary.is_success() {
            output.push_str(&format!("{}\n\n", "✓ All tests passed!".green()));
        } else {
            output.push_str(&format!("{}\n\n", "✗ Some tests failed!".red()));
        }

        output
    }
}

fn render_case(output: &mut String, case: &CaseRecord) {
    let verdict = if case.passed() {
        "PASSED".green()
    } else {
        "FAILED".red()
    };
    output.push_str(&format!("Running {}... {}\n", case.name, verdict));
    for failure in &case.failures {
        render_failure(output, failure);
    }
}

fn render_failure(output: &mut String, failure: &AssertionFailure) {
    output.push_str(&format!(
        "  Expected: {}, Got: {}\n",
        fixed(&failure.expected),
        fixed(&failure.actual)
    ));
    output.push_str(&format!("  File: {}, Line: {}\n", failure.file, failure.line));
}

/// Integers as-is, floats with six decimals.
fn fixed(value: &Value) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::Float(x) => format!("{x:.6}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::FailurePolicy;
    use crate::models::{CaseState, GroupReport, RunSummary};

    fn report(cases: Vec<CaseRecord>, summary: RunSummary) -> RunReport {
        RunReport {
            suite: "Calculator Unit Tests".into(),
            policy: FailurePolicy::StopOnFirst,
            groups: vec![GroupReport {
                function: "add".into(),
                cases,
            }],
            summary,
        }
    }

    fn record(name: &str, failures: Vec<AssertionFailure>) -> CaseRecord {
        CaseRecord {
            name: name.into(),
            state: if failures.is_empty() {
                CaseState::Passed
            } else {
                CaseState::Failed
            },
            assertions: 1,
            failures,
        }
    }

    #[test]
    fn render_all_passed() {
        let output = TerminalRenderer.render(&report(
            vec![record("test_add_zero", vec![])],
            RunSummary { total: 1, passed: 1, failed: 0 },
        ));
        assert!(output.contains("Calculator Unit Tests"));
        assert!(output.contains("Testing add function:"));
        assert!(output.contains("Running test_add_zero... "));
        assert!(output.contains("PASSED"));
        assert!(output.contains("Total:  1"));
        assert!(output.contains("All tests passed!"));
        assert!(!output.contains("Failed:"));
    }

    #[test]
    fn render_failure_details() {
        let failure = AssertionFailure {
            expected: Value::Float(5.0),
            actual: Value::Float(4.5),
            file: "src/harness/cases.rs".into(),
            line: 120,
        };
        let output = TerminalRenderer.render(&report(
            vec![record("test_divide", vec![failure])],
            RunSummary { total: 1, passed: 0, failed: 1 },
        ));
        assert!(output.contains("FAILED"));
        assert!(output.contains("  Expected: 5.000000, Got: 4.500000\n"));
        assert!(output.contains("  File: src/harness/cases.rs, Line: 120\n"));
        assert!(output.contains("Failed: 1"));
        assert!(output.contains("Some tests failed!"));
    }

    #[test]
    fn fixed_formats_like_printf() {
        assert_eq!(fixed(&Value::Int(-8)), "-8");
        assert_eq!(fixed(&Value::Float(1.25)), "1.250000");
    }
}
