//! Minimal assertion-and-reporting harness.
//!
//! A [`Suite`] is an ordered list of groups, each holding named
//! [`TestCase`]s. The [`Runner`] executes them in order against a single
//! [`TestContext`] and returns a [`RunReport`](crate::models::RunReport)
//! for the renderers in [`crate::output`].

pub mod assertions;
pub mod cases;
pub mod context;
pub mod runner;
pub mod suite;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub use assertions::{AssertionFailure, CheckResult, Checks};
pub use cases::calculator_suite;
pub use context::TestContext;
pub use runner::Runner;
pub use suite::{Group, Suite, TestCase};

/// What a case does after its first failing assertion.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum FailurePolicy {
    /// End the case immediately. Later assertions in the same case are
    /// skipped, so they can hide behind the first failure.
    #[default]
    StopOnFirst,
    /// Evaluate every assertion and report all failures.
    CollectAll,
}
