//! Environment-based configuration.

use std::collections::HashMap;

use crate::error::{EvalError, Result};
use crate::offsets::OffsetUnit;

use super::ConfigOverrides;

/// Environment configuration prefix.
pub const DEFAULT_PREFIX: &str = "REGEX_EVAL";

/// Common environment variables, without the prefix.
pub mod vars {
    /// Path to a TOML config file.
    pub const CONFIG: &str = "CONFIG";
    /// Offset unit for reported spans.
    pub const OFFSETS: &str = "OFFSETS";
    /// Compiled regex size limit in bytes.
    pub const SIZE_LIMIT: &str = "SIZE_LIMIT";
    /// Log filter directive.
    pub const LOG: &str = "LOG";
}

/// Environment variable reader.
///
/// Values are captured once at construction, so lookups never observe
/// later changes to the process environment.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Prefix for environment variables.
    prefix: String,
    /// Captured values.
    values: HashMap<String, String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl EnvConfig {
    /// Capture the current process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Capture an explicit set of variables.
    #[must_use]
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            values: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Build the full environment variable name.
    fn var_name(&self, name: &str) -> String {
        format!("{}_{}", self.prefix, name.to_uppercase())
    }

    /// Get a string value. Empty values count as unset.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(&self.var_name(name))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Check if a variable is set.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Collect the overrides present in the environment.
    pub fn overrides(&self) -> Result<ConfigOverrides> {
        let offsets = self
            .get(vars::OFFSETS)
            .map(|v| {
                v.parse::<OffsetUnit>().map_err(|e| {
                    EvalError::config(format!("{}: {e}", self.var_name(vars::OFFSETS)))
                })
            })
            .transpose()?;

        let size_limit = self
            .get(vars::SIZE_LIMIT)
            .map(|v| {
                v.trim().parse::<usize>().map_err(|_| {
                    EvalError::config(format!(
                        "{}: expected a byte count, got '{v}'",
                        self.var_name(vars::SIZE_LIMIT)
                    ))
                })
            })
            .transpose()?;

        Ok(ConfigOverrides {
            offsets,
            size_limit,
            log: self.get(vars::LOG).map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_prefixed_values() {
        let env = EnvConfig::from_vars([
            ("REGEX_EVAL_OFFSETS", "char"),
            ("REGEX_EVAL_SIZE_LIMIT", "4096"),
            ("REGEX_EVAL_LOG", "debug"),
            ("OFFSETS", "utf16"),
        ]);
        let o = env.overrides().unwrap();
        assert_eq!(o.offsets, Some(OffsetUnit::Char));
        assert_eq!(o.size_limit, Some(4096));
        assert_eq!(o.log.as_deref(), Some("debug"));
    }

    #[test]
    fn empty_values_are_unset() {
        let env = EnvConfig::from_vars([("REGEX_EVAL_OFFSETS", "")]);
        assert!(!env.is_set(vars::OFFSETS));
        assert_eq!(env.overrides().unwrap(), ConfigOverrides::default());
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let env = EnvConfig::from_vars([("REGEX_EVAL_SIZE_LIMIT", "lots")]);
        let err = env.overrides().unwrap_err();
        assert!(err.to_string().contains("REGEX_EVAL_SIZE_LIMIT"));

        let env = EnvConfig::from_vars([("REGEX_EVAL_OFFSETS", "words")]);
        assert!(matches!(env.overrides(), Err(EvalError::Config { .. })));
    }
}
