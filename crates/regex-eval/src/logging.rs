//! Diagnostic logging.
//!
//! Results go to stdout, so diagnostics always go to stderr.

use tracing_subscriber::EnvFilter;

use crate::config::EvalConfig;
use crate::error::{EvalError, Result};

/// Build the filter for a directive such as `warn` or `regex_eval=debug`.
pub fn filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| EvalError::config(format!("invalid log filter '{directive}': {e}")))
}

/// Install the global subscriber.
///
/// Installing more than once keeps the first subscriber.
pub fn init(config: &EvalConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter(&config.log)?)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("global subscriber already installed");
    }
    Ok(())
}
