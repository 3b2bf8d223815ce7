//! Pattern evaluation over a test file.
//!
//! The first match attempt begins one byte past the untrimmed first line
//! of the raw contents, and the whole file stays visible to anchors.
//! After each match scanning resumes at its end, or one character later
//! when the match was empty, so matches never overlap.
//!
//! Without `m`, `$` matches at the very end and also before a final line
//! terminator. The engine only knows the first, so the search also runs over
//! the contents with that terminator removed and the leftmost match wins.

use std::path::Path;

use regex::{Captures, Match, Regex, RegexBuilder};

use crate::config::EvalConfig;
use crate::error::{EvalError, Result};
use crate::flags::Flags;
use crate::offsets::OffsetMapper;
use crate::output::{MatchRecord, Span};
use crate::test_file::TestFile;

/// Compiles and runs test-file patterns.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    flags: Flags,
    config: EvalConfig,
}

impl Evaluator {
    /// Create an evaluator with the given flags and configuration.
    #[must_use]
    pub const fn new(flags: Flags, config: EvalConfig) -> Self {
        Self { flags, config }
    }

    /// The flags this evaluator compiles with.
    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Compile a pattern with this evaluator's flags and size limit.
    pub fn compile(&self, pattern: &str) -> Result<Regex> {
        let mut builder = RegexBuilder::new(pattern);
        self.flags.apply(&mut builder);
        if let Some(limit) = self.config.size_limit {
            builder.size_limit(limit);
        }

        let regex = builder
            .build()
            .map_err(|e| EvalError::pattern(pattern, &e))?;
        tracing::debug!(
            pattern,
            flags = %self.flags,
            groups = regex.captures_len() - 1,
            "compiled pattern"
        );
        Ok(regex)
    }

    /// Find every match in the test file's subject.
    pub fn evaluate(&self, test_file: &TestFile) -> Result<Vec<MatchRecord>> {
        let regex = self.compile(test_file.pattern())?;
        let contents = test_file.contents();
        let mapper = OffsetMapper::new(contents, self.config.offsets);

        // Outside multiline mode `$` also matches before a final line
        // terminator, so the contents are searched with it cut off as well.
        let before_final_terminator = if self.flags.contains(Flags::MULTILINE) {
            None
        } else {
            test_file.final_line_end().map(|end| &contents[..end])
        };

        let mut records = Vec::new();
        let mut pos = test_file.search_start();

        while pos <= contents.len() {
            let full = regex.captures_at(contents, pos);
            let trimmed = before_final_terminator
                .filter(|haystack| pos <= haystack.len())
                .and_then(|haystack| regex.captures_at(haystack, pos));
            let Some(caps) = leftmost(full, trimmed) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            let record = to_record(whole, &caps, &mapper);
            tracing::trace!(%record, "match");
            records.push(record);

            pos = if whole.start() == whole.end() {
                next_char_boundary(contents, whole.end())
            } else {
                whole.end()
            };
        }

        tracing::debug!(
            matches = records.len(),
            offsets = %self.config.offsets,
            "evaluation finished"
        );
        Ok(records)
    }
}

/// Read a test file and evaluate it.
///
/// An empty file yields no records.
pub fn evaluate_path(
    path: impl AsRef<Path>,
    flags: Flags,
    config: EvalConfig,
) -> Result<Vec<MatchRecord>> {
    match TestFile::read(path)? {
        Some(test_file) => Evaluator::new(flags, config).evaluate(&test_file),
        None => {
            tracing::debug!("empty test file, nothing to evaluate");
            Ok(Vec::new())
        }
    }
}

/// The earlier of two candidate matches, preferring `full` on a tie.
fn leftmost<'h>(
    full: Option<Captures<'h>>,
    trimmed: Option<Captures<'h>>,
) -> Option<Captures<'h>> {
    let start = |caps: &Captures<'h>| caps.get(0).map_or(usize::MAX, |m| m.start());
    match (full, trimmed) {
        (Some(f), Some(t)) if start(&t) < start(&f) => Some(t),
        (Some(f), _) => Some(f),
        (None, t) => t,
    }
}

fn to_record(whole: Match<'_>, caps: &Captures<'_>, mapper: &OffsetMapper<'_>) -> MatchRecord {
    let span = |m: Match<'_>| Span::from_exclusive(mapper.map(m.start()), mapper.map(m.end()));
    MatchRecord {
        span: span(whole),
        groups: caps.iter().skip(1).flatten().map(span).collect(),
    }
}

/// Offset of the character after `pos`, or one past the end.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(pos + 1, |c| pos + c.len_utf8())
}
