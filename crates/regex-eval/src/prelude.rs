//! Convenient re-exports for common regex-eval usage.
//!
//! # Example
//!
//! ```no_run
//! use regex_eval::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = evaluate_path("test.regex", Flags::parse("mi"), EvalConfig::load()?)?;
//!     write_records(&mut std::io::stdout().lock(), &records).map_err(EvalError::Output)?;
//!     Ok(())
//! }
//! ```

// Core types
pub use crate::config::EvalConfig;
pub use crate::flags::Flags;
pub use crate::test_file::TestFile;

// Error handling
pub use crate::error::{EvalError, Result};

// Evaluation
pub use crate::matcher::{Evaluator, evaluate_path};
pub use crate::offsets::OffsetUnit;
pub use crate::output::{MatchRecord, Span, write_records};
