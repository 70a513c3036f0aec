//! Test cases and the ordered suites that hold them.

use super::assertions::{CheckResult, Checks};

/// Body of a test case. Assertions go through `checks`; returning early
/// with `?` is how a case stops at its first failure.
pub type CaseBody = fn(&mut Checks) -> CheckResult;

/// A named unit of verification.
#[derive(Clone, Copy)]
pub struct TestCase {
    pub name: &'static str,
    pub body: CaseBody,
}

impl TestCase {
    pub const fn new(name: &'static str, body: CaseBody) -> Self {
        Self { name, body }
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish()
    }
}

/// Cases exercising one library function, run back to back.
#[derive(Debug, Clone)]
pub struct Group {
    pub function: &'static str,
    pub cases: Vec<TestCase>,
}

/// An ordered collection of groups. Execution order is insertion order.
#[derive(Debug, Clone)]
pub struct Suite {
    pub name: &'static str,
    pub groups: Vec<Group>,
}

impl Suite {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            groups: Vec::new(),
        }
    }

    /// Append a group of cases for `function`.
    pub fn group(mut self, function: &'static str, cases: impl IntoIterator<Item = TestCase>) -> Self {
        self.groups.push(Group {
            function,
            cases: cases.into_iter().collect(),
        });
        self
    }

    /// Total number of cases across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.cases.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
