//! calckit: four-function calculator with a self-contained test harness.
//!
//! Re-exports public modules for the binaries and integration tests.

pub mod calculator;
pub mod config;
pub mod constants;
pub mod demo;
pub mod env;
pub mod harness;
pub mod logging;
pub mod models;
pub mod output;

pub use calculator::{add, checked_divide, divide, multiply, subtract};
