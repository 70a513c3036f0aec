//! Outcome types for a harness run.

use serde::Serialize;
use strum::Display;

use crate::harness::assertions::AssertionFailure;
use crate::harness::FailurePolicy;

/// Lifecycle of a single test case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CaseState {
    #[default]
    NotRun,
    Running,
    Passed,
    Failed,
}

/// What happened when one case ran.
#[derive(Debug, Clone, Serialize)]
pub struct CaseRecord {
    pub name: String,
    pub state: CaseState,
    /// Assertions that were actually evaluated (skipped ones are not counted).
    pub assertions: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<AssertionFailure>,
}

impl CaseRecord {
    pub fn passed(&self) -> bool {
        self.state == CaseState::Passed
    }
}

/// Records for every case exercising one library function.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub function: String,
    pub cases: Vec<CaseRecord>,
}

/// Aggregate counters, computed once at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// `true` when nothing failed and every case that ran passed.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.total == self.passed
    }

    /// Process exit status for this run: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

/// Everything a renderer needs to describe a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub suite: String,
    pub policy: FailurePolicy,
    pub groups: Vec<GroupReport>,
    pub summary: RunSummary,
}

impl RunReport {
    /// All case records in execution order.
    pub fn cases(&self) -> impl Iterator<Item = &CaseRecord> {
        self.groups.iter().flat_map(|g| g.cases.iter())
    }
}
