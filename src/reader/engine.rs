//! Core reading engine - LineReader.
//!
//! [`LineReader`] owns a seekable byte source and hands out one line per
//! call. Internally it keeps a queue of pieces cut from the most recent
//! refill:
//!
//! - A refill reads `chunk_size` bytes at the reader's own position and
//!   keeps appending further chunks until the newest chunk contains the
//!   terminator or a read comes back short.
//! - The accumulated buffer is split left to right into pieces that keep
//!   their terminator; bytes after the last terminator become a fragment.
//! - A fragment popped before end of stream is carried: the next refill's
//!   first piece is appended to it.
//!
//! Memory use is bounded by the longest line plus one chunk, not by the
//! size of the source.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use chunklines::{LineReader, ReaderConfig};
//!
//! let config = ReaderConfig::default().with_chunk_size(4);
//! let mut reader = LineReader::from_reader(Cursor::new(b"one\ntwo\n\nfour".to_vec()), config)?;
//!
//! let mut lines = Vec::new();
//! while let Some(line) = reader.next_line()? {
//!     lines.push(line.to_string_lossy().into_owned());
//! }
//! assert_eq!(lines, ["one", "two", "", "four"]);
//! assert!(reader.is_closed());
//! # Ok::<(), chunklines::LineError>(())
//! ```

use std::collections::VecDeque;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::iter::FusedIterator;
use std::path::Path;

use bytes::{Bytes, BytesMut};
use log::{debug, trace};

use super::scan::{extract_lines, rfind_terminator};
use crate::config::ReaderConfig;
use crate::error::{LineError, Result};
use crate::line::Line;

/// Lifecycle of a [`LineReader`]'s source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderState {
    /// More data may be read from the source.
    Open,
    /// End of stream was observed; queued lines remain to be handed out.
    Exhausted,
    /// The source has been released. No further I/O is possible.
    Closed,
}

/// Pull-based line reader over a seekable byte source.
///
/// Reads are positional: before every chunk read the source is seeked to
/// [`position`](Self::position), so the reader's bookkeeping decides what is
/// read next, not whatever the handle's cursor happens to be.
///
/// # End of stream
///
/// A read that returns fewer bytes than requested is taken as end of
/// stream. That holds for regular files; pipe-like sources that deliver
/// short reads mid-stream will be truncated at the first one.
///
/// Once the last line has been handed out the source is dropped (closed)
/// and every further call returns `Ok(None)` without touching it. A reader
/// dropped before that point closes its source on drop; [`close`](Self::close)
/// releases it early without dropping the reader.
///
/// # Example
///
/// ```no_run
/// use chunklines::{LineReader, ReaderConfig};
///
/// let reader = LineReader::open("access.log", ReaderConfig::default())?;
/// for line in reader {
///     let line = line?;
///     println!("{}: {}", line.offset, line.to_string_lossy());
/// }
/// # Ok::<(), chunklines::LineError>(())
/// ```
#[derive(Debug)]
pub struct LineReader<R = File> {
    source: Option<R>,
    config: ReaderConfig,
    /// Offset of the next chunk read.
    position: u64,
    /// Offset of the first byte of the next line handed out.
    line_offset: u64,
    queue: VecDeque<Bytes>,
    state: ReaderState,
    last_terminator: Option<u64>,
}

impl LineReader<File> {
    /// Opens `path` read-only and creates a reader over it.
    ///
    /// The configuration is validated before the file is opened.
    pub fn open(path: impl AsRef<Path>, config: ReaderConfig) -> Result<Self> {
        let path = path.as_ref();
        config.validate()?;

        let file = File::open(path).map_err(|source| LineError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("opened {}", path.display());

        Self::from_reader(file, config)
    }

    /// Adopts an already-open file descriptor.
    ///
    /// The descriptor is taken over, not duplicated, and is closed when the
    /// reader reaches the end of the stream or is dropped.
    #[cfg(unix)]
    pub fn from_fd(fd: std::os::fd::OwnedFd, config: ReaderConfig) -> Result<Self> {
        Self::from_reader(File::from(fd), config)
    }
}

impl<R: Read + Seek> LineReader<R> {
    /// Creates a reader over an already-open source.
    ///
    /// Reading starts at offset 0 regardless of the source's current cursor.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::InvalidConfig`] if `config` does not validate.
    pub fn from_reader(reader: R, config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "adopted source (chunk size {}, terminator {:#04x})",
            config.chunk_size(),
            config.terminator()
        );

        Ok(Self {
            source: Some(reader),
            config,
            position: 0,
            line_offset: 0,
            queue: VecDeque::new(),
            state: ReaderState::Open,
            last_terminator: None,
        })
    }

    /// Returns the next line, or `None` once the source is exhausted.
    ///
    /// The terminator is stripped. After the first `None` every call returns
    /// `None` again without any I/O.
    ///
    /// # Errors
    ///
    /// Seek and read failures are returned as-is, without retry. A read
    /// interrupted by a signal (`ErrorKind::Interrupted`) is not a failure
    /// and is reissued. A failed refill leaves the reader's bookkeeping as it
    /// was before the call.
    pub fn next_line(&mut self) -> Result<Option<Line>> {
        if self.state != ReaderState::Open && self.queue.is_empty() {
            self.release();
            return Ok(None);
        }

        if self.queue.is_empty() {
            self.refill()?;
        }

        let Some(mut piece) = self.queue.pop_front() else {
            self.release();
            return Ok(None);
        };

        let terminator = self.config.terminator();

        // Fragment left over from a chunk boundary: complete it with the
        // first piece of the next refill.
        if piece.last() != Some(&terminator) && self.state == ReaderState::Open {
            if let Err(e) = self.refill() {
                self.queue.push_front(piece);
                return Err(e);
            }
            if let Some(rest) = self.queue.pop_front() {
                let mut joined = BytesMut::with_capacity(piece.len() + rest.len());
                joined.extend_from_slice(&piece);
                joined.extend_from_slice(&rest);
                piece = joined.freeze();
            }
        }

        if self.queue.is_empty() && self.state == ReaderState::Exhausted {
            self.release();
        }

        let offset = self.line_offset;
        self.line_offset += piece.len() as u64;

        let terminated = piece.last() == Some(&terminator);
        if terminated {
            piece.truncate(piece.len() - 1);
        }

        Ok(Some(Line {
            data: piece,
            offset,
            terminated,
        }))
    }

    /// Reads one or more chunks and queues the pieces they split into.
    ///
    /// Growth stops once the newest chunk holds a terminator or a read comes
    /// back short. Returns the number of bytes read.
    fn refill(&mut self) -> Result<usize> {
        let chunk_size = self.config.chunk_size();
        let terminator = self.config.terminator();
        let start = self.position;
        let source = self.source.as_mut().ok_or(LineError::Closed)?;

        let mut buf = BytesMut::with_capacity(chunk_size);
        let mut last_terminator = None;
        let mut exhausted = false;

        loop {
            let filled = buf.len();
            let offset = start + filled as u64;
            buf.resize(filled + chunk_size, 0);
            let n = read_chunk(source, offset, &mut buf[filled..])?;
            buf.truncate(filled + n);
            trace!("read {} of {} bytes at offset {}", n, chunk_size, offset);

            if let Some(idx) = rfind_terminator(&buf[filled..], terminator) {
                last_terminator = Some(offset + idx as u64);
            }

            if n < chunk_size {
                exhausted = true;
                break;
            }
            if last_terminator.is_some() {
                break;
            }
        }

        let data = buf.freeze();
        self.position = start + data.len() as u64;
        if last_terminator.is_some() {
            self.last_terminator = last_terminator;
        }
        if exhausted {
            debug!("end of stream at offset {}", self.position);
            self.state = ReaderState::Exhausted;
        }

        let pieces = extract_lines(&data, terminator);
        trace!(
            "refill of {} bytes at offset {} produced {} pieces",
            data.len(),
            start,
            pieces.len()
        );
        self.queue.extend(pieces);

        Ok(data.len())
    }

    /// Rewinds the reader to the start of the source for a fresh pass.
    ///
    /// Position, queued lines, the end-of-stream flag and the last terminator
    /// offset are cleared. The source itself is not touched here; the next
    /// read seeks it back to offset 0.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::Closed`] if the source was already released.
    pub fn reset(&mut self) -> Result<()> {
        if self.source.is_none() {
            return Err(LineError::Closed);
        }

        debug!("reset at offset {}", self.position);
        self.position = 0;
        self.line_offset = 0;
        self.queue.clear();
        self.state = ReaderState::Open;
        self.last_terminator = None;
        Ok(())
    }
}

impl<R> LineReader<R> {
    /// Releases the source now. Idempotent.
    ///
    /// Queued lines are discarded; later calls to
    /// [`next_line`](LineReader::next_line) return `None`.
    pub fn close(&mut self) {
        self.queue.clear();
        self.release();
    }

    fn release(&mut self) {
        if let Some(source) = self.source.take() {
            debug!("closing source at offset {}", self.position);
            drop(source);
        }
        self.state = ReaderState::Closed;
    }

    /// Returns the source if it has not been released yet.
    pub fn into_inner(mut self) -> Option<R> {
        self.source.take()
    }

    /// Returns the offset of the next chunk read.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns the absolute offset of the most recently located terminator.
    ///
    /// This is the rightmost terminator in the chunk that ended the latest
    /// refill that found one. `None` until a terminator has been seen.
    pub fn last_terminator_position(&self) -> Option<u64> {
        self.last_terminator
    }

    /// Returns the reader's lifecycle state.
    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Returns true once the source has been released.
    pub fn is_closed(&self) -> bool {
        self.state == ReaderState::Closed
    }

    /// Returns the number of pieces queued from the latest refill.
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// Returns the configuration used by this reader.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }
}

impl<R: Read + Seek> Iterator for LineReader<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

impl<R: Read + Seek> FusedIterator for LineReader<R> {}

/// Positions `source` at `offset` and issues a single read into `buf`.
///
/// `Interrupted` is retried; any other error is returned.
fn read_chunk<R: Read + Seek>(source: &mut R, offset: u64, buf: &mut [u8]) -> Result<usize> {
    source
        .seek(SeekFrom::Start(offset))
        .map_err(|source| LineError::Seek { offset, source })?;

    loop {
        match source.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(LineError::Read { offset, source }),
        }
    }
}
