//! Regex test files.
//!
//! A test file holds the pattern on its first line and the subject text
//! on every line after it:
//!
//! ```text
//! (\w+)@example\.com
//! contact alice@example.com or bob@example.com
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{EvalError, Result};

/// A parsed regex test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFile {
    contents: String,
    first_line_len: usize,
    subject_start: usize,
}

impl TestFile {
    /// Split raw contents into pattern line and subject.
    ///
    /// Returns `None` when the contents are empty, which means there is
    /// nothing to test. A first line may end in `\n`, `\r\n` or a lone `\r`.
    #[must_use]
    pub fn parse(contents: String) -> Option<Self> {
        if contents.is_empty() {
            return None;
        }

        let bytes = contents.as_bytes();
        let (first_line_len, subject_start) =
            match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') => (i, i + 2),
                Some(i) => (i, i + 1),
                None => (contents.len(), contents.len()),
            };

        Some(Self {
            contents,
            first_line_len,
            subject_start,
        })
    }

    /// Read and parse a test file from disk.
    ///
    /// Content that is not valid UTF-8 is reported as an I/O error.
    pub fn read(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        let contents = read_contents(path).map_err(|e| EvalError::io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "read test file");
        Ok(Self::parse(contents))
    }

    /// The full raw contents of the file.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// The first line exactly as written, without its terminator.
    #[must_use]
    pub fn raw_first_line(&self) -> &str {
        &self.contents[..self.first_line_len]
    }

    /// The pattern source: the first line with surrounding whitespace removed.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.raw_first_line().trim()
    }

    /// The subject text following the first line's terminator.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.contents[self.subject_start..]
    }

    /// Byte offset at which the subject begins in the raw contents.
    #[must_use]
    pub const fn subject_start(&self) -> usize {
        self.subject_start
    }

    /// Length of the contents without a final `\n`, `\r\n` or `\r`.
    ///
    /// `None` when the contents do not end in a line terminator.
    #[must_use]
    pub fn final_line_end(&self) -> Option<usize> {
        let len = self.contents.len();
        if self.contents.ends_with("\r\n") {
            Some(len - 2)
        } else if self.contents.ends_with(['\n', '\r']) {
            Some(len - 1)
        } else {
            None
        }
    }

    /// Byte offset into the raw contents where the first match attempt begins.
    ///
    /// Always one past the untrimmed first line, regardless of which
    /// terminator ended it. With `\r\n` this lands on the `\n`. May exceed
    /// the content length when the file is a single unterminated line.
    #[must_use]
    pub const fn search_start(&self) -> usize {
        self.first_line_len + 1
    }
}

fn read_contents(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
