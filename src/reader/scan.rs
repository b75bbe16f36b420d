//! Buffer scanning: splitting a refill buffer into lines and locating the
//! last terminator of a freshly read chunk.

use bytes::Bytes;

/// Splits `data` into pieces, left to right, at every `terminator`.
///
/// Each piece is a zero-copy slice of `data`. Every piece except possibly
/// the last keeps its trailing terminator; bytes after the final terminator
/// form a trailing fragment without one. No piece is ever empty.
pub(crate) fn extract_lines(data: &Bytes, terminator: u8) -> Vec<Bytes> {
    let mut lines = Vec::new();
    let mut line_start = 0usize;

    for (i, &byte) in data.iter().enumerate() {
        if byte == terminator {
            lines.push(data.slice(line_start..=i));
            line_start = i + 1;
        }
    }

    // Leftover fragment, resolved by the caller's carry step
    if line_start < data.len() {
        lines.push(data.slice(line_start..));
    }

    lines
}

/// Returns the index of the rightmost `terminator` in `region`.
///
/// Only used to decide when a refill may stop growing and to report
/// [`LineReader::last_terminator_position`](crate::LineReader::last_terminator_position).
/// Line extraction never depends on which match this finds.
pub(crate) fn rfind_terminator(region: &[u8], terminator: u8) -> Option<usize> {
    region.iter().rposition(|&byte| byte == terminator)
}
