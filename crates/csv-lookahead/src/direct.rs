use core::fmt;

use bstr::ByteSlice;

use crate::{
    CharSource, SourceOptions,
    utf8::{LeadByteDecoder, decode_len},
};

/// Lookahead over bytes that are already in memory.
///
/// `B` is whatever keeps the bytes alive: `&[u8]`, `&str`, `String`,
/// `Arc<[u8]>`, ... The source reads through `B::as_ref` and never copies.
pub struct DirectSource<B> {
    backing: B,
    cursor: usize,
    decoder: LeadByteDecoder,
}

impl<B: AsRef<[u8]>> DirectSource<B> {
    /// A source positioned at the first byte of `backing`, using the UTF-8
    /// decoder.
    pub fn new(backing: B) -> Self {
        Self::with_options(backing, SourceOptions::default())
    }

    /// Like [`new`](Self::new), taking the decoder from `options`. Buffer
    /// sizing options do not apply.
    pub fn with_options(backing: B, options: SourceOptions) -> Self {
        Self {
            backing,
            cursor: 0,
            decoder: options.decoder,
        }
    }

    /// Byte offset of the read position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The backing bytes.
    pub fn get_ref(&self) -> &B {
        &self.backing
    }

    /// Unwraps the backing bytes.
    pub fn into_inner(self) -> B {
        self.backing
    }

    fn rest(&self) -> &[u8] {
        &self.backing.as_ref()[self.cursor..]
    }
}

impl<B: AsRef<[u8]>> CharSource for DirectSource<B> {
    fn is_exhausted(&mut self) -> bool {
        self.cursor == self.backing.as_ref().len()
    }

    fn peek_sequence_length(&mut self) -> usize {
        self.rest()
            .first()
            .map_or(0, |&lead| decode_len(self.decoder, lead))
    }

    fn peek_bytes(&mut self) -> &[u8] {
        self.rest()
    }

    fn compare_prefix(&mut self, candidate: &[u8]) -> bool {
        self.rest().starts_with(candidate)
    }

    /// Advances by `n` bytes, stopping at the end of the backing bytes.
    fn skip(&mut self, n: usize) {
        let len = self.backing.as_ref().len();
        self.cursor = self.cursor.saturating_add(n).min(len);
    }

    fn reset(&mut self) -> bool {
        self.cursor = 0;
        true
    }
}

impl<B: AsRef<[u8]>> fmt::Debug for DirectSource<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectSource")
            .field("rest", &self.rest().as_bstr())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
