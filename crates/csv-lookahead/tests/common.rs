#![allow(missing_docs, dead_code)]

use std::io::Cursor;

use csv_lookahead::{BufferedSource, CharSource, DirectSource, Forward, Source, SourceOptions};

/// Which backend a scenario runs against.
#[derive(Debug, Clone, Copy)]
pub enum Backend {
    Direct,
    /// Seekable stream with a window of the given size.
    Buffered(usize),
    /// Forward-only stream with a window of the given size.
    Forward(usize),
}

pub fn open(backend: Backend, input: &'static str) -> Box<dyn CharSource> {
    match backend {
        Backend::Direct => Box::new(DirectSource::new(input)),
        Backend::Buffered(capacity) => Box::new(BufferedSource::new(
            Cursor::new(input),
            SourceOptions::exact(capacity),
        )),
        Backend::Forward(capacity) => Box::new(BufferedSource::new(
            Forward::new(input.as_bytes()),
            SourceOptions::exact(capacity),
        )),
    }
}

/// CSV dialect for [`records`].
pub struct Dialect<'d> {
    pub delimiter: &'d [u8],
    pub quote: &'d [u8],
}

pub const COMMA: Dialect<'static> = Dialect {
    delimiter: b",",
    quote: b"\"",
};

/// A small RFC 4180 tokenizer: quoted fields, doubled quotes, `\n` and `\r\n`
/// record ends. Driven purely through `CharSource`.
pub fn records<S: CharSource + ?Sized>(src: &mut S, dialect: &Dialect<'_>) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = Vec::new();
    let mut dirty = false;

    while !src.is_exhausted() {
        if src.skip_if(dialect.quote) {
            dirty = true;
            loop {
                if src.is_exhausted() {
                    break;
                }
                if src.skip_if(dialect.quote) {
                    if src.compare_prefix(dialect.quote) {
                        field.extend_from_slice(dialect.quote);
                        src.skip(dialect.quote.len());
                    } else {
                        break;
                    }
                } else {
                    field.extend_from_slice(src.peek_sequence());
                    src.skip_sequence();
                }
            }
        } else if src.skip_if(dialect.delimiter) {
            record.push(String::from_utf8_lossy(&field).into_owned());
            field.clear();
            dirty = true;
        } else if src.skip_if(b"\r\n") || src.skip_if(b"\n") {
            record.push(String::from_utf8_lossy(&field).into_owned());
            records.push(std::mem::take(&mut record));
            field.clear();
            dirty = false;
        } else {
            field.extend_from_slice(src.peek_sequence());
            src.skip_sequence();
            dirty = true;
        }
    }
    if dirty || !field.is_empty() {
        record.push(String::from_utf8_lossy(&field).into_owned());
        records.push(record);
    }
    records
}

/// Every record as one `a|b|c` line.
pub fn render(records: &[Vec<String>]) -> String {
    records
        .iter()
        .map(|r| r.join("|"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn open_source(input: &'static str, streaming: bool, capacity: usize) -> Source<'static> {
    if streaming {
        Source::open(
            csv_lookahead::Item::stream(Cursor::new(input)),
            SourceOptions::exact(capacity),
        )
    } else {
        Source::open(input, SourceOptions::default())
    }
}
