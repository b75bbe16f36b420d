//! Configuration for line reading.
//!
//! - [`ReaderConfig`] - Chunk size and terminator byte

use crate::error::{LineError, Result};

/// Default number of bytes requested per underlying read (1 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Largest accepted chunk size (1 GiB).
pub const MAX_CHUNK_SIZE: usize = 1 << 30;

/// Default line terminator (ASCII linefeed).
pub const DEFAULT_TERMINATOR: u8 = b'\n';

/// Configuration for a [`LineReader`](crate::LineReader).
///
/// `chunk_size` bounds how much is read per call into the source; a line
/// longer than one chunk is assembled from several reads. The terminator is
/// a single byte. Multi-byte delimiters such as `\r\n` are not recognised:
/// splitting on `\n` leaves the `\r` in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReaderConfig {
    chunk_size: usize,
    terminator: u8,
}

impl ReaderConfig {
    /// Creates a new configuration.
    ///
    /// Returns error if `chunk_size` is zero or above [`MAX_CHUNK_SIZE`].
    pub fn new(chunk_size: usize, terminator: u8) -> Result<Self> {
        if chunk_size == 0 {
            return Err(LineError::InvalidConfig {
                message: "chunk size must be non-zero",
            });
        }

        if chunk_size > MAX_CHUNK_SIZE {
            return Err(LineError::InvalidConfig {
                message: "chunk size exceeds MAX_CHUNK_SIZE",
            });
        }

        Ok(Self {
            chunk_size,
            terminator,
        })
    }

    /// Sets the chunk size.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Sets the terminator byte.
    pub fn with_terminator(mut self, terminator: u8) -> Self {
        self.terminator = terminator;
        self
    }

    /// Sets the terminator from a character.
    ///
    /// Only the first byte of the character's UTF-8 encoding is used, so
    /// `'é'` becomes `0xC3`.
    pub fn with_terminator_char(self, c: char) -> Self {
        let mut utf8 = [0u8; 4];
        let first = c.encode_utf8(&mut utf8).as_bytes()[0];
        self.with_terminator(first)
    }

    /// Returns the chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the terminator byte.
    pub fn terminator(&self) -> u8 {
        self.terminator
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.chunk_size, self.terminator).map(|_| ())
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            terminator: DEFAULT_TERMINATOR,
        }
    }
}
