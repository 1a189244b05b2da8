#![no_main]
use std::io::Cursor;

use arbitrary::Arbitrary;
use csv_lookahead::{BufferedSource, CharSource, DirectSource, SourceOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    PeekLength,
    PeekSequence,
    Compare(Vec<u8>),
    Skip(u8),
    SkipSequence,
    IsExhausted,
    Reset,
}

#[derive(Arbitrary, Debug)]
struct Input {
    capacity: u8,
    data: Vec<u8>,
    ops: Vec<Op>,
}

// The in-memory backend is the reference: with skips and candidates no longer
// than one window, the buffered backend must answer identically.
fuzz_target!(|input: Input| {
    let capacity = 4 + usize::from(input.capacity % 60);
    let mut buffered = BufferedSource::new(
        Cursor::new(input.data.as_slice()),
        SourceOptions::exact(capacity),
    );
    let mut direct = DirectSource::new(input.data.as_slice());

    for op in input.ops {
        match op {
            Op::PeekLength => {
                assert_eq!(buffered.peek_sequence_length(), direct.peek_sequence_length());
            }
            Op::PeekSequence => {
                assert_eq!(buffered.peek_sequence(), direct.peek_sequence());
            }
            Op::Compare(candidate) => {
                let candidate = &candidate[..candidate.len().min(capacity)];
                assert_eq!(
                    buffered.compare_prefix(candidate),
                    direct.compare_prefix(candidate),
                    "candidate {candidate:?}"
                );
            }
            Op::Skip(n) => {
                let n = usize::from(n) % (capacity + 1);
                buffered.skip(n);
                direct.skip(n);
            }
            Op::SkipSequence => {
                assert_eq!(buffered.skip_sequence(), direct.skip_sequence());
            }
            Op::IsExhausted => {
                assert_eq!(buffered.is_exhausted(), direct.is_exhausted());
            }
            Op::Reset => {
                assert!(buffered.reset());
                assert!(direct.reset());
            }
        }

        let (start, end) = buffered.window_bounds();
        assert!(start <= end && end <= buffered.capacity());
    }
});
