//! `tracing` subscriber setup shared by both binaries.
//!
//! Events go to stderr so they never mix with a report on stdout. The
//! filter comes from `CALCKIT_LOG` (standard `EnvFilter` syntax) and
//! defaults to `warn`.

use tracing_subscriber::EnvFilter;

use crate::constants::ENV_LOG;
use crate::env::Env;

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from the environment, falling back to the default on
/// absent or malformed values.
pub fn filter(env: &Env) -> EnvFilter {
    env.var(ENV_LOG)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(env: &Env) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(env))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
