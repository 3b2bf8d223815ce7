//! Error types for regex-eval.
//!
//! Every failure aborts the current evaluation. Nothing is retried and no
//! partial output is written; the caller (usually an editor plugin) is
//! expected to surface the message.

use std::path::PathBuf;

use thiserror::Error;

/// Exit status for I/O and pattern failures.
pub const EXIT_FAILURE: i32 = 1;

/// Exit status for command line misuse.
pub const EXIT_USAGE: i32 = 2;

/// Exit status for an invalid configuration.
pub const EXIT_CONFIG: i32 = 3;

/// The error type for regex-eval operations.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The test file could not be read.
    #[error("unable to read '{}': {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Results could not be written.
    #[error("unable to write results: {0}")]
    Output(#[source] std::io::Error),

    /// The pattern line failed to compile.
    #[error("invalid pattern '{pattern}': {message}")]
    Pattern {
        /// The trimmed pattern text.
        pattern: String,
        /// The regex engine's description of the problem.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// The program was invoked incorrectly.
    #[error("{message}")]
    Usage {
        /// Description of the misuse.
        message: String,
    },
}

impl EvalError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a pattern error from a regex compilation failure.
    pub fn pattern(pattern: impl Into<String>, source: &regex::Error) -> Self {
        let message = match source {
            regex::Error::Syntax(s) => s.clone(),
            regex::Error::CompiledTooBig(limit) => {
                format!("compiled pattern exceeds size limit of {limit} bytes")
            }
            other => other.to_string(),
        };
        Self::Pattern {
            pattern: pattern.into(),
            message,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Check if this is an I/O error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a pattern error.
    #[must_use]
    pub const fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern { .. })
    }

    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } | Self::Output(_) | Self::Pattern { .. } => EXIT_FAILURE,
            Self::Usage { .. } => EXIT_USAGE,
            Self::Config { .. } => EXIT_CONFIG,
        }
    }
}

/// A specialized Result type for regex-eval operations.
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_display_includes_path() {
        let err = EvalError::io(
            "/tmp/missing.regex",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.regex"));
        assert!(msg.contains("not found"));
        assert!(err.is_io());
        assert!(!err.is_pattern());
    }

    #[test]
    fn pattern_error_from_regex_error() {
        let source = regex::Regex::new("(abc").unwrap_err();
        let err = EvalError::pattern("(abc", &source);
        assert!(err.is_pattern());
        assert!(err.to_string().starts_with("invalid pattern '(abc'"));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(EvalError::usage("missing file").exit_code(), EXIT_USAGE);
        assert_eq!(EvalError::config("bad").exit_code(), EXIT_CONFIG);
        let io_err = EvalError::io("x", io::Error::other("boom"));
        assert_eq!(io_err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn output_error_is_failure() {
        let err = EvalError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "unable to write results: pipe closed");
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert!(!err.is_io());
    }

    #[test]
    fn usage_display_is_bare_message() {
        assert_eq!(EvalError::usage("no file given").to_string(), "no file given");
    }
}
