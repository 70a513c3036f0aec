//! Shared types used across modules.
//!
//! The harness produces these, the renderers consume them.

pub mod run;

pub use run::{CaseRecord, CaseState, GroupReport, RunReport, RunSummary};
