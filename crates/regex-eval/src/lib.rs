//! regex-eval: evaluate regex test files for editor integrations
//!
//! A test file carries a pattern on its first line and sample text after
//! it. Evaluating the file reports every non-overlapping match, together
//! with the capture groups that took part, as inclusive offsets into the
//! whole file.
//!
//! # Example
//!
//! ```
//! use regex_eval::{EvalConfig, Evaluator, Flags, TestFile};
//!
//! let file = TestFile::parse("(a)b\nab ab".to_string()).unwrap();
//! let records = Evaluator::new(Flags::empty(), EvalConfig::default())
//!     .evaluate(&file)
//!     .unwrap();
//!
//! let lines: Vec<String> = records.iter().map(ToString::to_string).collect();
//! assert_eq!(lines, ["5-6,5-5", "8-9,8-8"]);
//! ```
//!
//! # Offsets
//!
//! Offsets are UTF-8 byte positions by default. `REGEX_EVAL_OFFSETS=char`
//! or `utf16` switches to Unicode scalar or UTF-16 code unit positions.

pub mod config;
pub mod error;
pub mod flags;
pub mod logging;
pub mod matcher;
pub mod offsets;
pub mod output;
pub mod prelude;
pub mod test_file;

pub use config::{ConfigOverrides, EnvConfig, EvalConfig, FileConfig};
pub use error::{EvalError, Result};
pub use flags::Flags;
pub use matcher::{Evaluator, evaluate_path};
pub use offsets::{OffsetMapper, OffsetUnit};
pub use output::{MatchRecord, Span, write_records};
pub use test_file::TestFile;
