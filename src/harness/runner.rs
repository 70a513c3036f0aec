//! Sequential suite execution.

use crate::models::{CaseRecord, GroupReport, RunReport};

use super::assertions::Checks;
use super::context::TestContext;
use super::suite::{Suite, TestCase};
use super::FailurePolicy;

/// Runs suites case by case on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner {
    policy: FailurePolicy,
}

impl Runner {
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    /// Execute every case of `suite` in order and collect the results.
    pub fn run(&self, suite: &Suite) -> RunReport {
        let mut ctx = TestContext::new();
        tracing::debug!(suite = suite.name, cases = suite.len(), policy = %self.policy, "starting run");

        let groups = suite
            .groups
            .iter()
            .map(|group| GroupReport {
                function: group.function.to_string(),
                cases: group
                    .cases
                    .iter()
                    .map(|case| self.run_case(case, &mut ctx))
                    .collect(),
            })
            .collect();

        let summary = ctx.summary();
        tracing::debug!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            "run finished"
        );

        RunReport {
            suite: suite.name.to_string(),
            policy: self.policy,
            groups,
            summary,
        }
    }

    fn run_case(&self, case: &TestCase, ctx: &mut TestContext) -> CaseRecord {
        let running = ctx.begin_case();
        tracing::debug!(case = case.name, state = %ctx.state(), "running");

        let mut checks = Checks::new(self.policy);
        let result = (case.body)(&mut checks);
        let assertions = checks.evaluated();
        let failures = checks.finish(result);

        let state = ctx.end_case(running, failures.is_empty());
        tracing::debug!(case = case.name, %state, assertions, "finished");

        CaseRecord {
            name: case.name.to_string(),
            state,
            assertions,
            failures,
        }
    }
}
