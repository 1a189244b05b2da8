use std::io;

use thiserror::Error;

/// Failure reported by a [`ByteStream`](crate::ByteStream).
///
/// The lookahead operations never return this directly: a failed pull is
/// recorded on the [`BufferedSource`](crate::BufferedSource) and treated as
/// end of input, and a failed rewind makes `reset()` return `false`.
#[derive(Error, Debug)]
pub enum StreamError {
    /// The stream cannot move back to its origin.
    #[error("stream is not seekable (at byte {position})")]
    NotSeekable {
        /// Bytes already pulled from the stream when the rewind was attempted.
        position: u64,
    },
    /// The underlying reader or seeker failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl StreamError {
    /// The [`io::ErrorKind`] behind this error, if it came from the reader.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            StreamError::Io(err) => Some(err.kind()),
            StreamError::NotSeekable { .. } => None,
        }
    }
}
