//! Run-wide counters.
//!
//! One `TestContext` is owned by the runner and threaded through every
//! case. `begin_case` hands out a [`RunningCase`] token that `end_case`
//! consumes, so each case bumps `tests_run` once at the start and exactly
//! one of `tests_passed` / `tests_failed` at the end.

use crate::models::{CaseState, RunSummary};

/// Proof that a case has started and not yet finished.
#[derive(Debug)]
#[must_use = "a started case must be finished with TestContext::end_case"]
pub struct RunningCase {
    _private: (),
}

/// Counters for a single harness run.
#[derive(Debug, Default)]
pub struct TestContext {
    tests_run: usize,
    tests_passed: usize,
    tests_failed: usize,
    state: CaseState,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a case as running.
    pub fn begin_case(&mut self) -> RunningCase {
        self.tests_run += 1;
        self.state = CaseState::Running;
        RunningCase { _private: () }
    }

    /// Record the outcome of the running case and return its final state.
    pub fn end_case(&mut self, _case: RunningCase, passed: bool) -> CaseState {
        self.state = if passed {
            self.tests_passed += 1;
            CaseState::Passed
        } else {
            self.tests_failed += 1;
            CaseState::Failed
        };
        self.state
    }

    /// State of the most recent case (`NotRun` before the first one).
    pub fn state(&self) -> CaseState {
        self.state
    }

    /// Snapshot the counters.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            total: self.tests_run,
            passed: self.tests_passed,
            failed: self.tests_failed,
        }
    }
}
