//! Sliding-window lookahead over a pull-based [`ByteStream`].
//!
//! Layout
//! - `buf` is allocated once with `capacity + SEQUENCE_SLACK` bytes; only the
//!   first `capacity` bytes are ever filled. The slack is never touched:
//!   compaction already lets a whole sequence fit, so it only keeps the
//!   allocation size the data model names.
//! - `[start, end)` is the unread window. A refill shifts it down to offset 0
//!   and pulls until the buffer is full or the stream runs dry.
//!
//! Invariants
//! - `start <= end <= capacity`.
//! - `cached_seq_len` is 0 or the decoded length of `buf[start]`; every
//!   `skip` resets it to 0.
//! - Once a pull comes back short, `at_eof` stays set until `reset()` is
//!   called and no further pulls are made. Any `reset()`, even a failed one,
//!   clears `at_eof` and the recorded error but leaves the window alone.

use core::fmt;
use std::io;

use bstr::ByteSlice;

use crate::{
    ByteStream, CharSource, SourceOptions, StreamError,
    options::SEQUENCE_SLACK,
    utf8::{LeadByteDecoder, decode_len},
};

/// Lookahead over a stream, buffered through a fixed-capacity window.
///
/// # Examples
///
/// ```rust
/// use csv_lookahead::{BufferedSource, CharSource, SourceOptions};
/// use std::io::Cursor;
///
/// let mut src = BufferedSource::new(Cursor::new("\"a\",b"), SourceOptions::exact(4));
/// assert!(src.skip_if(b"\""));
/// assert_eq!(src.peek_sequence(), b"a");
/// src.skip(2);
/// assert!(src.compare_prefix(b",b"));
/// ```
pub struct BufferedSource<S> {
    stream: S,
    buf: Box<[u8]>,
    capacity: usize,
    start: usize,
    end: usize,
    cached_seq_len: usize,
    at_eof: bool,
    error: Option<StreamError>,
    decoder: LeadByteDecoder,
}

impl<S: ByteStream> BufferedSource<S> {
    /// Wraps `stream`, allocating a window of [`SourceOptions::capacity`]
    /// bytes. Nothing is read until the first lookahead.
    pub fn new(stream: S, options: SourceOptions) -> Self {
        let capacity = options.capacity();
        Self {
            stream,
            buf: vec![0u8; capacity + SEQUENCE_SLACK].into_boxed_slice(),
            capacity,
            start: 0,
            end: 0,
            cached_seq_len: 0,
            at_eof: false,
            error: None,
            decoder: options.decoder,
        }
    }

    /// Window capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of buffered, unread bytes.
    #[must_use]
    pub fn window_len(&self) -> usize {
        self.end - self.start
    }

    /// The I/O error that ended input early, if any.
    #[must_use]
    pub fn error(&self) -> Option<&StreamError> {
        self.error.as_ref()
    }

    /// Takes the recorded I/O error, clearing the failure flag.
    ///
    /// End of input stays latched; only a successful `reset()` pulls again.
    pub fn take_error(&mut self) -> Option<StreamError> {
        self.error.take()
    }

    /// The wrapped stream.
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// The wrapped stream. Reading from it directly desynchronises the window.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Unwraps the stream, dropping any buffered bytes.
    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Window bounds `(start, end)` within the buffer.
    #[cfg(any(test, feature = "fuzzing"))]
    #[must_use]
    pub fn window_bounds(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Shifts the window to offset 0 and pulls until the buffer is full.
    ///
    /// A short pull latches end of input. Bytes that did arrive are kept.
    fn refill(&mut self) {
        if self.start != 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        if self.at_eof {
            return;
        }

        let wanted = self.capacity - self.end;
        let read = self.pull(wanted);
        self.end += read;
        if read < wanted {
            tracing::trace!(wanted, read, "short read, end of input");
            self.at_eof = true;
        } else {
            tracing::trace!(read, window = %self.window().as_bstr(), "refilled");
        }
    }

    /// Reads into `buf[end..end + wanted]` until full, end of stream or error.
    fn pull(&mut self, wanted: usize) -> usize {
        let base = self.end;
        let mut filled = 0;
        while filled < wanted {
            match self.stream.read(&mut self.buf[base + filled..base + wanted]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    tracing::debug!(error = %err, "read failed, treating as end of input");
                    self.error = Some(StreamError::Io(err));
                    break;
                }
            }
        }
        filled
    }

    fn window(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }

    /// Drops the end-of-input latch and any recorded error; the next refill
    /// pulls again.
    fn clear_failure(&mut self) {
        self.at_eof = false;
        self.error = None;
    }

    fn clear_window(&mut self) {
        self.start = 0;
        self.end = 0;
    }
}

impl<S: ByteStream> CharSource for BufferedSource<S> {
    fn is_exhausted(&mut self) -> bool {
        if self.start == self.end && !self.at_eof {
            self.refill();
        }
        self.at_eof && self.start == self.end
    }

    fn peek_sequence_length(&mut self) -> usize {
        if self.start == self.end {
            self.refill();
            if self.start == self.end {
                return 0;
            }
        }
        self.cached_seq_len = decode_len(self.decoder, self.buf[self.start]);
        self.cached_seq_len
    }

    fn peek_bytes(&mut self) -> &[u8] {
        if self.cached_seq_len == 0 {
            self.peek_sequence_length();
        }
        if self.start + self.cached_seq_len > self.end {
            self.refill();
        }
        self.window()
    }

    fn compare_prefix(&mut self, candidate: &[u8]) -> bool {
        if self.window_len() < candidate.len() {
            self.refill();
        }
        if self.window_len() < candidate.len() {
            return false;
        }
        if let [byte] = candidate {
            return self.buf[self.start] == *byte;
        }
        self.buf[self.start..self.start + candidate.len()] == *candidate
    }

    fn skip(&mut self, n: usize) {
        // The cached length described the sequence we are moving past.
        self.cached_seq_len = 0;

        let mut n = n;
        if n > self.window_len() {
            n -= self.window_len();
            self.start = self.end;
            self.refill();
        }
        if n >= self.window_len() {
            self.clear_window();
        } else {
            self.start += n;
        }
    }

    fn reset(&mut self) -> bool {
        if self.stream.position() == 0 {
            // Nothing was pulled, so the window is already empty.
            self.clear_failure();
            return true;
        }
        if let Err(err) = self.stream.rewind() {
            tracing::debug!(error = %err, "reset failed, keeping current position");
            self.clear_failure();
            return false;
        }
        tracing::debug!("reset to start of stream");
        self.clear_window();
        self.cached_seq_len = 0;
        self.clear_failure();
        true
    }
}

impl<S> fmt::Debug for BufferedSource<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedSource")
            .field("window", &self.buf[self.start..self.end].as_bstr())
            .field("start", &self.start)
            .field("end", &self.end)
            .field("capacity", &self.capacity)
            .field("cached_seq_len", &self.cached_seq_len)
            .field("at_eof", &self.at_eof)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
