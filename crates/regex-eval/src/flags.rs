//! Matching modifiers selected by the flags argument.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use regex::RegexBuilder;

bitflags::bitflags! {
    /// Modifiers applied when compiling the pattern.
    ///
    /// Parsed from a short string: `m`, `i` and `d` select a modifier,
    /// every other character is ignored.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u8 {
        /// `^` and `$` match at internal line boundaries.
        const MULTILINE = 0b0000_0001;
        /// Case-insensitive comparison.
        const CASE_INSENSITIVE = 0b0000_0010;
        /// `.` also matches line terminators.
        const DOT_MATCHES_NEW_LINE = 0b0000_0100;
    }
}

impl Flags {
    /// Parse a flags string. Never fails.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        s.chars().fold(Self::empty(), |acc, c| match c {
            'm' => acc | Self::MULTILINE,
            'i' => acc | Self::CASE_INSENSITIVE,
            'd' => acc | Self::DOT_MATCHES_NEW_LINE,
            _ => acc,
        })
    }

    /// Configure a regex builder with these modifiers.
    ///
    /// `\r\n` is always treated as a line terminator: `.` does not match
    /// `\r`, and multiline `$` matches before `\r\n`.
    pub fn apply<'b>(&self, builder: &'b mut RegexBuilder) -> &'b mut RegexBuilder {
        builder
            .crlf(true)
            .multi_line(self.contains(Self::MULTILINE))
            .case_insensitive(self.contains(Self::CASE_INSENSITIVE))
            .dot_matches_new_line(self.contains(Self::DOT_MATCHES_NEW_LINE))
    }
}

impl FromStr for Flags {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(Self::MULTILINE) {
            f.write_str("m")?;
        }
        if self.contains(Self::CASE_INSENSITIVE) {
            f.write_str("i")?;
        }
        if self.contains(Self::DOT_MATCHES_NEW_LINE) {
            f.write_str("d")?;
        }
        Ok(())
    }
}
