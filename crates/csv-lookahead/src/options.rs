use crate::utf8::{self, LeadByteDecoder, MAX_SEQUENCE_LEN};

/// Smallest buffer a [`BufferedSource`](crate::BufferedSource) allocates
/// unless [`SourceOptions::exact_buffer_size`] is set.
pub const MIN_BUFFER_SIZE: usize = 4096;

/// Extra bytes allocated past the window capacity.
pub const SEQUENCE_SLACK: usize = 10;

/// Configuration for building a lookahead source.
///
/// # Examples
///
/// ```rust
/// use csv_lookahead::{BufferedSource, SourceOptions};
/// use std::io::Cursor;
///
/// let options = SourceOptions {
///     buffer_size: Some(64 * 1024),
///     ..Default::default()
/// };
/// let source = BufferedSource::new(Cursor::new("a,b\n"), options);
/// assert_eq!(source.capacity(), 64 * 1024);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SourceOptions {
    /// Requested window capacity for buffered sources, in bytes.
    ///
    /// Ignored by in-memory sources. Requests below [`MIN_BUFFER_SIZE`] are
    /// raised to it.
    ///
    /// # Default
    ///
    /// `None` (use [`MIN_BUFFER_SIZE`])
    pub buffer_size: Option<usize>,

    /// Whether to honour `buffer_size` even below [`MIN_BUFFER_SIZE`].
    ///
    /// Tiny windows force refills on nearly every lookahead, which is what
    /// boundary tests want. The capacity still never drops below four bytes,
    /// so one complete UTF-8 sequence always fits.
    ///
    /// # Default
    ///
    /// `false`
    pub exact_buffer_size: bool,

    /// Maps the byte at the read position to its sequence length.
    ///
    /// Results outside `1..=4` are clamped into that range.
    ///
    /// # Default
    ///
    /// [`utf8::sequence_length`]
    pub decoder: LeadByteDecoder,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            buffer_size: None,
            exact_buffer_size: false,
            decoder: utf8::sequence_length,
        }
    }
}

impl SourceOptions {
    /// Options for a buffered source with exactly `capacity` bytes of window.
    #[must_use]
    pub fn exact(capacity: usize) -> Self {
        Self {
            buffer_size: Some(capacity),
            exact_buffer_size: true,
            ..Self::default()
        }
    }

    /// The window capacity these options resolve to.
    #[must_use]
    pub fn capacity(&self) -> usize {
        let requested = self.buffer_size.unwrap_or(MIN_BUFFER_SIZE);
        if self.exact_buffer_size {
            requested.max(MAX_SEQUENCE_LEN)
        } else {
            requested.max(MIN_BUFFER_SIZE)
        }
    }
}
