//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary after loading)
//! 2. Environment variables
//! 3. `.calckit.toml` in the working directory
//! 4. `~/.config/calckit/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{ENV_COLOR, ENV_FAILURE_POLICY, ENV_FORMAT, ENV_NO_COLOR};
use crate::env::Env;
use crate::harness::FailurePolicy;
use crate::output::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub harness: HarnessConfig,
    pub output: OutputConfig,
}

/// Harness behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub failure_policy: FailurePolicy,
}

/// Report rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            color: true,
        }
    }
}

/// One config file as written: only keys present in the file are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub harness: HarnessLayer,
    pub output: OutputLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HarnessLayer {
    pub failure_policy: Option<FailurePolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputLayer {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `dir/.calckit.toml`, then applies
    /// environment variable overrides. Missing files are skipped.
    pub fn load(dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let local = dir.map(|d| d.join(crate::constants::CONFIG_FILENAME));
        Self::load_layers(Self::global_config_path().as_deref(), local.as_deref(), env)
    }

    /// Layered load from explicit file paths.
    pub fn load_layers(
        global: Option<&Path>,
        local: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        for path in [global, local].into_iter().flatten() {
            if path.exists() {
                let layer = Self::load_file(path)?;
                tracing::debug!(path = %path.display(), "loaded config layer");
                config.merge(layer);
            }
        }

        config.apply_env_vars(env);
        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a file layer into this config; every key the layer sets wins.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(policy) = layer.harness.failure_policy {
            self.harness.failure_policy = policy;
        }
        if let Some(format) = layer.output.format {
            self.output.format = format;
        }
        if let Some(color) = layer.output.color {
            self.output.color = color;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(ENV_FAILURE_POLICY) {
            match val.parse::<FailurePolicy>() {
                Ok(policy) => self.harness.failure_policy = policy,
                Err(_) => eprintln!("Warning: ignoring invalid {ENV_FAILURE_POLICY} value: {val}"),
            }
        }
        if let Ok(val) = env.var(ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => eprintln!("Warning: ignoring invalid {ENV_FORMAT} value: {val}"),
            }
        }

        if env.var(ENV_NO_COLOR).is_ok_and(|v| !v.is_empty()) {
            self.output.color = false;
        }
        match env.flag(ENV_COLOR) {
            Some(Ok(enabled)) => self.output.color = enabled,
            Some(Err(val)) => eprintln!("Warning: ignoring invalid {ENV_COLOR} value: {val}"),
            None => {}
        }
    }
}
