//! App-wide constants.
//!
//! Tool name, config paths and environment variable names live here so a
//! rename only touches this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "calckit";

/// Crate version, as reported by `calckit version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = ".calckit.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "calckit";

/// Absolute tolerance used by floating-point assertions.
pub const FLOAT_TOLERANCE: f64 = 0.0001;

/// Diagnostic written when a division by zero is replaced with the sentinel.
pub const DIVISION_BY_ZERO_NOTICE: &str = "Error: Division by zero";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FAILURE_POLICY: &str = "CALCKIT_FAILURE_POLICY";
pub const ENV_FORMAT: &str = "CALCKIT_FORMAT";
pub const ENV_COLOR: &str = "CALCKIT_COLOR";
pub const ENV_LOG: &str = "CALCKIT_LOG";

/// Cross-tool convention: any value disables colour.
pub const ENV_NO_COLOR: &str = "NO_COLOR";
