//! Environment lookups behind a small seam.
//!
//! [`Env::real()`] reads the process environment; tests build an
//! [`Env::mock()`] from a map so nothing has to call `std::env::set_var`.

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Read only from the given key-value pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Interpret a variable as a boolean switch.
    ///
    /// `None` when the variable is absent; `Some(Err(value))` when it is
    /// present but not one of the recognised words.
    pub fn flag(&self, name: &str) -> Option<Result<bool, String>> {
        let val = self.var(name).ok()?;
        Some(match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(val),
        })
    }
}
