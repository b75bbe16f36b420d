//! Line reading engine for seekable byte sources.
//!
//! - [`LineReader`] - Pull-based reader with `next_line()` / `Iterator` API
//! - [`ReaderState`] - Open / Exhausted / Closed lifecycle

mod engine;
mod scan;

pub use engine::{LineReader, ReaderState};
