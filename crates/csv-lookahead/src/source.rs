/// The lookahead operations a CSV tokenizer drives.
///
/// All operations take `&mut self`: even a peek may pull more input into a
/// buffered window. A tokenizer written against this trait works unchanged
/// over a [`BufferedSource`](crate::BufferedSource), a
/// [`DirectSource`](crate::DirectSource) or the [`Source`](crate::Source)
/// union of both.
///
/// # Examples
///
/// ```rust
/// use csv_lookahead::{CharSource, DirectSource};
///
/// fn field<S: CharSource>(src: &mut S) -> Vec<u8> {
///     let mut out = Vec::new();
///     while !src.is_exhausted() && !src.compare_prefix(b",") {
///         out.extend_from_slice(src.peek_sequence());
///         src.skip_sequence();
///     }
///     out
/// }
///
/// let mut src = DirectSource::new("héllo,world");
/// assert_eq!(field(&mut src), "héllo".as_bytes());
/// assert!(src.skip_if(b","));
/// assert_eq!(field(&mut src), b"world");
/// assert!(src.is_exhausted());
/// ```
pub trait CharSource {
    /// True once every byte has been consumed and no more input will come.
    fn is_exhausted(&mut self) -> bool;

    /// Length in bytes of the sequence at the read position, or 0 at end of
    /// input.
    fn peek_sequence_length(&mut self) -> usize;

    /// Unread bytes starting at the read position.
    ///
    /// Holds at least [`peek_sequence_length`](Self::peek_sequence_length)
    /// bytes unless the input ends in the middle of that sequence.
    fn peek_bytes(&mut self) -> &[u8];

    /// Whether the next `candidate.len()` unread bytes equal `candidate`.
    ///
    /// Running out of input is a mismatch, not an error.
    fn compare_prefix(&mut self, candidate: &[u8]) -> bool;

    /// Advances the read position by `n` bytes.
    ///
    /// In-memory sources always move by `n` (stopping at the end). A buffered
    /// source moves by `n` only while `n` is at most its window capacity: a
    /// larger skip discards what is buffered plus one refill, and the rest of
    /// the request is dropped.
    fn skip(&mut self, n: usize);

    /// Returns to the start of the input. `false` if the input cannot be
    /// rewound, in which case the read position is unchanged.
    fn reset(&mut self) -> bool;

    /// Exactly the bytes of the next sequence; shorter than its decoded length
    /// only when the input is truncated.
    fn peek_sequence(&mut self) -> &[u8] {
        let len = self.peek_sequence_length();
        let bytes = self.peek_bytes();
        &bytes[..len.min(bytes.len())]
    }

    /// Skips the next sequence and returns its decoded length (0 at end of
    /// input).
    fn skip_sequence(&mut self) -> usize {
        let len = self.peek_sequence_length();
        if len > 0 {
            self.skip(len);
        }
        len
    }

    /// Skips `candidate` if it is next in the input.
    fn skip_if(&mut self, candidate: &[u8]) -> bool {
        if self.compare_prefix(candidate) {
            self.skip(candidate.len());
            true
        } else {
            false
        }
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn is_exhausted(&mut self) -> bool {
        (**self).is_exhausted()
    }

    fn peek_sequence_length(&mut self) -> usize {
        (**self).peek_sequence_length()
    }

    fn peek_bytes(&mut self) -> &[u8] {
        (**self).peek_bytes()
    }

    fn compare_prefix(&mut self, candidate: &[u8]) -> bool {
        (**self).compare_prefix(candidate)
    }

    fn skip(&mut self, n: usize) {
        (**self).skip(n);
    }

    fn reset(&mut self) -> bool {
        (**self).reset()
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn is_exhausted(&mut self) -> bool {
        (**self).is_exhausted()
    }

    fn peek_sequence_length(&mut self) -> usize {
        (**self).peek_sequence_length()
    }

    fn peek_bytes(&mut self) -> &[u8] {
        (**self).peek_bytes()
    }

    fn compare_prefix(&mut self, candidate: &[u8]) -> bool {
        (**self).compare_prefix(candidate)
    }

    fn skip(&mut self, n: usize) {
        (**self).skip(n);
    }

    fn reset(&mut self) -> bool {
        (**self).reset()
    }
}
