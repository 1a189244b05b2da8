//! Splits delimited text into fields, one record per line, reading either a
//! file (buffered) or standard input (forward-only stream).
//!
//! Run with
//!
//! ```bash
//! cargo run -p csv-lookahead --example split_fields -- data.csv ';'
//! printf 'a,b\nc,d\n' | cargo run -p csv-lookahead --example split_fields
//! ```
#![allow(missing_docs)]

use std::{env, fs::File, io};

use csv_lookahead::{CharSource, Forward, Item, Seekable, Source, SourceOptions};

fn main() -> io::Result<()> {
    let mut args = env::args().skip(1);
    let path = args.next().filter(|p| p != "-");
    let delimiter = args.next().unwrap_or_else(|| ",".to_owned());

    let item = match path {
        Some(path) => Item::stream(Seekable::new(File::open(path)?)),
        None => Item::stream(Forward::new(io::stdin().lock())),
    };
    let mut src = Source::open(item, SourceOptions::default());

    let mut line = 1usize;
    let mut field = Vec::new();
    let mut fields = Vec::new();
    while !src.is_exhausted() {
        if src.skip_if(delimiter.as_bytes()) {
            fields.push(String::from_utf8_lossy(&field).into_owned());
            field.clear();
        } else if src.skip_if(b"\n") {
            fields.push(String::from_utf8_lossy(&field).into_owned());
            field.clear();
            println!("{line}: {fields:?}");
            fields.clear();
            line += 1;
        } else {
            field.extend_from_slice(src.peek_sequence());
            src.skip_sequence();
        }
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(String::from_utf8_lossy(&field).into_owned());
        println!("{line}: {fields:?}");
    }

    if let Source::Buffered(buffered) = &mut src {
        if let Some(err) = buffered.take_error() {
            return Err(io::Error::other(err));
        }
    }
    Ok(())
}
