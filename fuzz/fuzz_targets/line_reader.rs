#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use chunklines::{Line, LineReader, ReaderConfig};

fn read_all(data: &[u8], config: ReaderConfig) -> Vec<Line> {
    LineReader::from_reader(Cursor::new(data.to_vec()), config)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fuzz_target!(|input: (u8, u8, Vec<u8>)| {
    let (terminator, chunk_size, data) = input;
    let chunk_size = chunk_size as usize + 1;

    let config = ReaderConfig::default()
        .with_terminator(terminator)
        .with_chunk_size(chunk_size);
    let lines = read_all(&data, config);

    // Verify: re-joining reproduces the input
    let mut rejoined = Vec::with_capacity(data.len());
    for line in &lines {
        rejoined.extend_from_slice(&line.data);
        if line.terminated {
            rejoined.push(terminator);
        }
    }
    assert_eq!(rejoined, data);

    // Verify: offsets are contiguous
    let mut expected_offset = 0u64;
    for line in &lines {
        assert_eq!(line.offset, expected_offset);
        expected_offset = line.end() + u64::from(line.terminated);
    }

    // Verify: only the final line may lack a terminator
    if let Some((_, init)) = lines.split_last() {
        assert!(init.iter().all(|l| l.terminated));
    }

    // Verify: chunk size does not change the result
    let whole = read_all(&data, config.with_chunk_size(data.len() + 1));
    assert_eq!(lines, whole);
});
