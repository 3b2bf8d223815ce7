//! File-based configuration loading.
//!
//! ```toml
//! offsets = "utf16"
//! size_limit = 1048576
//! log = "regex_eval=debug"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{EvalError, Result};
use crate::offsets::OffsetUnit;

use super::ConfigOverrides;

/// Contents of a TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Offset unit for reported spans.
    pub offsets: Option<OffsetUnit>,
    /// Compiled regex size limit in bytes.
    pub size_limit: Option<usize>,
    /// Log filter directive.
    pub log: Option<String>,
}

impl FileConfig {
    /// Parse TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EvalError::config(e.message()))
    }

    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EvalError::config(format!("unable to read {}: {e}", path.display()))
        })?;
        Self::parse(&content).map_err(|e| match e {
            EvalError::Config { message } => {
                EvalError::config(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }
}

impl From<FileConfig> for ConfigOverrides {
    fn from(file: FileConfig) -> Self {
        Self {
            offsets: file.offsets,
            size_limit: file.size_limit,
            log: file.log,
        }
    }
}
