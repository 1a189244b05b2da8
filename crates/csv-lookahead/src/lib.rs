//! Character lookahead for CSV tokenizers.
//!
//! A tokenizer needs three things from its input: the length of the next
//! UTF-8 sequence, whether a delimiter or quote string comes next, and a way to
//! step past what it has consumed. [`CharSource`] is that interface, with two
//! backends:
//!
//! - [`BufferedSource`] pulls from a [`ByteStream`] through a fixed window,
//!   refilling on demand and treating a short read as end of input.
//! - [`DirectSource`] walks bytes that are already in memory.
//!
//! [`Source::open`] picks the backend for an [`Item`].
//!
//! ```rust
//! use csv_lookahead::{CharSource, Item, Source, SourceOptions};
//! use std::io::Cursor;
//!
//! let mut src = Source::open(Item::stream(Cursor::new("id;naïve\n")), SourceOptions::default());
//! let mut fields = vec![Vec::new()];
//! while !src.is_exhausted() {
//!     if src.skip_if(b";") {
//!         fields.push(Vec::new());
//!     } else if src.skip_if(b"\n") {
//!         break;
//!     } else {
//!         let seq = src.peek_sequence().to_vec();
//!         fields.last_mut().unwrap().extend_from_slice(&seq);
//!         src.skip_sequence();
//!     }
//! }
//! assert_eq!(fields, vec![b"id".to_vec(), "naïve".as_bytes().to_vec()]);
//! ```
//!
//! Nothing here validates UTF-8. Malformed lead bytes count as one-byte
//! sequences, and a sequence cut short by the end of input is handed back
//! truncated.

mod buffered;
mod direct;
mod error;
mod item;
mod options;
mod source;
mod stream;
pub mod utf8;

#[cfg(test)]
mod tests;

pub use buffered::BufferedSource;
pub use direct::DirectSource;
pub use error::StreamError;
pub use item::{Item, Source};
pub use options::{MIN_BUFFER_SIZE, SEQUENCE_SLACK, SourceOptions};
pub use source::CharSource;
pub use stream::{ByteStream, Forward, Seekable};
