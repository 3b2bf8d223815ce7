//! Configuration for regex-eval.
//!
//! Values come from three layers, later layers winning:
//!
//! 1. Built-in defaults.
//! 2. A TOML file named by `REGEX_EVAL_CONFIG`.
//! 3. `REGEX_EVAL_*` environment variables.

pub mod env;
pub mod file;

use std::path::PathBuf;

use crate::error::Result;
use crate::offsets::OffsetUnit;

pub use env::EnvConfig;
pub use file::FileConfig;

/// Default log filter directive.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for an evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalConfig {
    /// Unit in which offsets are reported.
    pub offsets: OffsetUnit,

    /// Maximum compiled size of the pattern, in bytes.
    /// `None` keeps the regex engine's default.
    pub size_limit: Option<usize>,

    /// `tracing` filter directive for diagnostics on stderr.
    pub log: String,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            offsets: OffsetUnit::default(),
            size_limit: None,
            log: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EvalConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset unit.
    #[must_use]
    pub const fn offsets(mut self, unit: OffsetUnit) -> Self {
        self.offsets = unit;
        self
    }

    /// Set the compiled size limit.
    #[must_use]
    pub const fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    /// Set the log filter directive.
    #[must_use]
    pub fn log(mut self, directive: impl Into<String>) -> Self {
        self.log = directive.into();
        self
    }

    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_from(&EnvConfig::from_env())
    }

    /// Load configuration from a captured environment.
    ///
    /// The config file, if `REGEX_EVAL_CONFIG` names one, must exist and
    /// parse; the environment then overrides whatever it set.
    pub fn load_from(environment: &EnvConfig) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = environment.get(env::vars::CONFIG) {
            let path = PathBuf::from(path);
            config.apply(FileConfig::load(&path)?.into());
            tracing::debug!(path = %path.display(), "loaded config file");
        }

        config.apply(environment.overrides()?);
        Ok(config)
    }

    /// Apply a layer of overrides.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(offsets) = overrides.offsets {
            self.offsets = offsets;
        }
        if let Some(limit) = overrides.size_limit {
            self.size_limit = Some(limit);
        }
        if let Some(log) = overrides.log {
            self.log = log;
        }
    }
}

/// A partial configuration produced by one layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Offset unit, if set by this layer.
    pub offsets: Option<OffsetUnit>,
    /// Size limit, if set by this layer.
    pub size_limit: Option<usize>,
    /// Log filter, if set by this layer.
    pub log: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EvalConfig::default();
        assert_eq!(config.offsets, OffsetUnit::Byte);
        assert_eq!(config.size_limit, None);
        assert_eq!(config.log, "warn");
    }

    #[test]
    fn builder_pattern() {
        let config = EvalConfig::new()
            .offsets(OffsetUnit::Utf16)
            .size_limit(1 << 16)
            .log("debug");
        assert_eq!(config.offsets, OffsetUnit::Utf16);
        assert_eq!(config.size_limit, Some(65536));
        assert_eq!(config.log, "debug");
    }

    #[test]
    fn apply_keeps_unset_values() {
        let mut config = EvalConfig::new().size_limit(10);
        config.apply(ConfigOverrides {
            offsets: Some(OffsetUnit::Char),
            ..Default::default()
        });
        assert_eq!(config.offsets, OffsetUnit::Char);
        assert_eq!(config.size_limit, Some(10));
    }

    #[test]
    fn load_from_empty_env_is_default() {
        let env = EnvConfig::from_vars(Vec::<(String, String)>::new());
        assert_eq!(EvalConfig::load_from(&env).unwrap(), EvalConfig::default());
    }
}
