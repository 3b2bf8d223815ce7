//! Offset units for reported spans.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// The unit in which match offsets are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// UTF-8 byte offsets.
    #[default]
    Byte,
    /// Unicode scalar value offsets.
    Char,
    /// UTF-16 code unit offsets.
    Utf16,
}

impl FromStr for OffsetUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "byte" | "bytes" => Ok(Self::Byte),
            "char" | "chars" => Ok(Self::Char),
            "utf16" | "utf-16" => Ok(Self::Utf16),
            other => Err(format!(
                "unknown offset unit '{other}' (expected byte, char or utf16)"
            )),
        }
    }
}

impl fmt::Display for OffsetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Utf16 => "utf16",
        })
    }
}

/// Converts byte offsets within a text into the configured unit.
#[derive(Debug, Clone, Copy)]
pub struct OffsetMapper<'t> {
    text: &'t str,
    unit: OffsetUnit,
}

impl<'t> OffsetMapper<'t> {
    /// Create a mapper over `text`.
    #[must_use]
    pub const fn new(text: &'t str, unit: OffsetUnit) -> Self {
        Self { text, unit }
    }

    /// Convert a byte offset that lies on a character boundary.
    #[must_use]
    pub fn map(&self, byte_offset: usize) -> usize {
        let prefix = &self.text[..byte_offset];
        match self.unit {
            OffsetUnit::Byte => byte_offset,
            OffsetUnit::Char => prefix.chars().count(),
            OffsetUnit::Utf16 => prefix.encode_utf16().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_units() {
        assert_eq!("byte".parse::<OffsetUnit>(), Ok(OffsetUnit::Byte));
        assert_eq!("CHAR".parse::<OffsetUnit>(), Ok(OffsetUnit::Char));
        assert_eq!("utf-16".parse::<OffsetUnit>(), Ok(OffsetUnit::Utf16));
        assert!("words".parse::<OffsetUnit>().is_err());
    }

    #[test]
    fn ascii_is_identical_in_every_unit() {
        let text = "hello world";
        for unit in [OffsetUnit::Byte, OffsetUnit::Char, OffsetUnit::Utf16] {
            assert_eq!(OffsetMapper::new(text, unit).map(6), 6);
        }
    }

    #[test]
    fn multibyte_text() {
        // 'é' is 2 bytes, 1 char, 1 UTF-16 unit; '𝄞' is 4 bytes, 1 char, 2 units.
        let text = "é𝄞x";
        assert_eq!(OffsetMapper::new(text, OffsetUnit::Byte).map(6), 6);
        assert_eq!(OffsetMapper::new(text, OffsetUnit::Char).map(6), 2);
        assert_eq!(OffsetMapper::new(text, OffsetUnit::Utf16).map(6), 3);
    }
}
