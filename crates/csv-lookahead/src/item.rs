//! Picking a backend for a string-valued input.

use std::sync::Arc;

use crate::{BufferedSource, ByteStream, CharSource, DirectSource, SourceOptions};

/// A string-valued input, either fully materialized or still streaming.
pub enum Item<'a> {
    /// Bytes already in memory, shared rather than copied.
    Materialized(Arc<[u8]>),
    /// Bytes still to be pulled from a stream.
    Streaming(Box<dyn ByteStream + 'a>),
}

impl Item<'_> {
    /// Whether the bytes are already in memory.
    #[must_use]
    pub fn is_materialized(&self) -> bool {
        matches!(self, Item::Materialized(_))
    }
}

impl<'a> Item<'a> {
    /// Wraps a stream.
    pub fn stream(stream: impl ByteStream + 'a) -> Self {
        Item::Streaming(Box::new(stream))
    }
}

impl From<Arc<[u8]>> for Item<'_> {
    fn from(bytes: Arc<[u8]>) -> Self {
        Item::Materialized(bytes)
    }
}

impl From<Vec<u8>> for Item<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Item::Materialized(bytes.into())
    }
}

impl From<String> for Item<'_> {
    fn from(text: String) -> Self {
        Item::Materialized(text.into_bytes().into())
    }
}

impl From<&str> for Item<'_> {
    fn from(text: &str) -> Self {
        Item::Materialized(text.as_bytes().into())
    }
}

/// Either backend behind one [`CharSource`].
#[derive(Debug)]
pub enum Source<'a> {
    /// Streaming input through a fixed window.
    Buffered(BufferedSource<Box<dyn ByteStream + 'a>>),
    /// In-memory input.
    Direct(DirectSource<Arc<[u8]>>),
}

impl<'a> Source<'a> {
    /// Opens the backend that fits `item`.
    ///
    /// ```rust
    /// use csv_lookahead::{CharSource, Item, Source, SourceOptions};
    /// use std::io::Cursor;
    ///
    /// let mut text = Source::open("a;b", SourceOptions::default());
    /// let mut stream = Source::open(Item::stream(Cursor::new("a;b")), SourceOptions::default());
    /// assert!(matches!(text, Source::Direct(_)));
    /// assert!(matches!(stream, Source::Buffered(_)));
    /// assert_eq!(text.peek_bytes(), stream.peek_bytes());
    /// ```
    pub fn open(item: impl Into<Item<'a>>, options: SourceOptions) -> Self {
        match item.into() {
            Item::Materialized(bytes) => Source::Direct(DirectSource::with_options(bytes, options)),
            Item::Streaming(stream) => Source::Buffered(BufferedSource::new(stream, options)),
        }
    }
}

impl CharSource for Source<'_> {
    fn is_exhausted(&mut self) -> bool {
        match self {
            Source::Buffered(s) => s.is_exhausted(),
            Source::Direct(s) => s.is_exhausted(),
        }
    }

    fn peek_sequence_length(&mut self) -> usize {
        match self {
            Source::Buffered(s) => s.peek_sequence_length(),
            Source::Direct(s) => s.peek_sequence_length(),
        }
    }

    fn peek_bytes(&mut self) -> &[u8] {
        match self {
            Source::Buffered(s) => s.peek_bytes(),
            Source::Direct(s) => s.peek_bytes(),
        }
    }

    fn compare_prefix(&mut self, candidate: &[u8]) -> bool {
        match self {
            Source::Buffered(s) => s.compare_prefix(candidate),
            Source::Direct(s) => s.compare_prefix(candidate),
        }
    }

    fn skip(&mut self, n: usize) {
        match self {
            Source::Buffered(s) => s.skip(n),
            Source::Direct(s) => s.skip(n),
        }
    }

    fn reset(&mut self) -> bool {
        match self {
            Source::Buffered(s) => s.reset(),
            Source::Direct(s) => s.reset(),
        }
    }
}
