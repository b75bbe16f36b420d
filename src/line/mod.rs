//! The Line type - one terminator-stripped line from the source.

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;

/// A single line with its position in the source.
///
/// The terminator byte is never part of `data`. An empty `Line` is a real
/// line (two adjacent terminators); end of input is signalled by `None`
/// from [`LineReader::next_line`](crate::LineReader::next_line).
///
/// # Example
///
/// ```
/// use chunklines::Line;
/// use bytes::Bytes;
///
/// let line = Line::new(Bytes::from_static(b"hello"), 6, true);
/// assert_eq!(line.len(), 5);
/// assert_eq!(line.range(), 6..11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    /// Line bytes, terminator stripped.
    pub data: Bytes,

    /// Absolute offset of the first byte of the line in the source.
    pub offset: u64,

    /// Whether a terminator followed this line in the source.
    pub terminated: bool,
}

impl Line {
    /// Creates a new line.
    pub fn new(data: impl Into<Bytes>, offset: u64, terminated: bool) -> Self {
        Self {
            data: data.into(),
            offset,
            terminated,
        }
    }

    /// Returns the length of the line, excluding the terminator.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the line has no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the line bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the start offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset of the data (exclusive, terminator not counted).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the line data as a range of source offsets.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.offset..self.end()
    }

    /// Returns true if the source had a terminator after this line.
    ///
    /// Only the final line of a source that does not end with the
    /// terminator reports `false`.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Consumes the line and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }

    /// Decodes the line as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl AsRef<[u8]> for Line {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq<[u8]> for Line {
    fn eq(&self, other: &[u8]) -> bool {
        self.data.as_ref() == other
    }
}

impl PartialEq<&[u8]> for Line {
    fn eq(&self, other: &&[u8]) -> bool {
        self.data.as_ref() == *other
    }
}

impl From<Line> for Bytes {
    fn from(line: Line) -> Self {
        line.data
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({} bytes @ {}", self.len(), self.offset)?;
        if !self.terminated {
            write!(f, ", unterminated")?;
        }
        write!(f, ")")
    }
}
