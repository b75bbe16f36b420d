//! chunklines
//!
//! Memory-bounded line iteration for Rust.
//!
//! `chunklines` reads a file (or any `Read + Seek` source) in fixed-size
//! chunks and hands out one line at a time. It is meant for inputs that are
//! too large to load whole:
//!
//! - log files
//! - CSV / TSV exports
//! - newline-delimited JSON
//! - any record format with a single-byte separator
//!
//! The crate intentionally:
//! - does NOT decode text (lines are raw `Bytes`)
//! - does NOT support multi-byte delimiters
//! - does NOT do async I/O
//!
//! It only does one thing: **Read chunks → yield lines**
//!
//! # Example
//!
//! ```no_run
//! use chunklines::{LineError, LineReader, ReaderConfig};
//!
//! fn main() -> Result<(), LineError> {
//!     let config = ReaderConfig::default().with_chunk_size(4096);
//!     let mut reader = LineReader::open("data.txt", config)?;
//!
//!     while let Some(line) = reader.next_line()? {
//!         println!("{:>8}: {}", line.offset, line.to_string_lossy());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod line;
mod reader;

//
// Public surface (intentionally tiny)
//

pub use config::{DEFAULT_CHUNK_SIZE, DEFAULT_TERMINATOR, MAX_CHUNK_SIZE, ReaderConfig};
pub use error::{LineError, Result};
pub use line::Line;
pub use reader::{LineReader, ReaderState};
