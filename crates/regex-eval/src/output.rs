//! Match records and their line format.
//!
//! Each match is written as `start-end[,gstart-gend]*`, where every end
//! offset is inclusive.

use std::fmt;
use std::io::Write;

/// An inclusive span of offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First offset covered by the span.
    pub start: usize,
    /// Last offset covered by the span.
    ///
    /// For an empty match this is `start - 1`.
    pub end_inclusive: usize,
}

impl Span {
    /// Build a span from an exclusive end offset.
    ///
    /// An empty span at offset 0 has no inclusive end below it and is
    /// reported as `0-0`. The evaluator never produces one, since scanning
    /// starts past the pattern line.
    #[must_use]
    pub const fn from_exclusive(start: usize, end: usize) -> Self {
        Self {
            start,
            end_inclusive: end.saturating_sub(1),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end_inclusive)
    }
}

/// One reported match: the overall span followed by participating groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Span of the whole match.
    pub span: Span,
    /// Spans of the capture groups that took part in the match, in group order.
    pub groups: Vec<Span>,
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.span)?;
        for group in &self.groups {
            write!(f, ",{group}")?;
        }
        Ok(())
    }
}

/// Write one line per record and flush.
pub fn write_records<W: Write>(writer: &mut W, records: &[MatchRecord]) -> std::io::Result<()> {
    for record in records {
        writeln!(writer, "{record}")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_groups() {
        let record = MatchRecord {
            span: Span::from_exclusive(5, 10),
            groups: Vec::new(),
        };
        assert_eq!(record.to_string(), "5-9");
    }

    #[test]
    fn display_with_groups() {
        let record = MatchRecord {
            span: Span::from_exclusive(5, 10),
            groups: vec![Span::from_exclusive(6, 8), Span::from_exclusive(9, 10)],
        };
        assert_eq!(record.to_string(), "5-9,6-7,9-9");
    }

    #[test]
    fn empty_span_at_zero_does_not_underflow() {
        let span = Span::from_exclusive(0, 0);
        assert_eq!(span.end_inclusive, 0);
        assert_eq!(span.to_string(), "0-0");
        assert_eq!(Span::from_exclusive(3, 3).to_string(), "3-2");
    }

    #[test]
    fn write_records_one_line_each() {
        let records = vec![
            MatchRecord {
                span: Span::from_exclusive(4, 6),
                groups: vec![Span::from_exclusive(4, 5)],
            },
            MatchRecord {
                span: Span::from_exclusive(7, 9),
                groups: vec![Span::from_exclusive(7, 8)],
            },
        ];
        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "4-5,4-4\n7-8,7-7\n");
    }

    #[test]
    fn write_no_records_writes_nothing() {
        let mut out = Vec::new();
        write_records(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
