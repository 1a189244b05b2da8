//! The pull-based byte stream a [`BufferedSource`](crate::BufferedSource)
//! reads from.
//!
//! A stream reads sequentially, knows how many bytes it has handed out, and
//! may or may not be able to return to its origin. [`Seekable`] and
//! [`Forward`] adapt any [`Read`] to this contract; [`Cursor`] implements it
//! directly.

use std::io::{self, Cursor, Read, Seek, SeekFrom};

use crate::StreamError;

/// Sequential byte source with an optional rewind.
pub trait ByteStream {
    /// Reads up to `buf.len()` bytes, returning how many were written.
    ///
    /// Returning `0` for a non-empty `buf` means end of input.
    ///
    /// # Errors
    ///
    /// Any error of the underlying reader.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Absolute offset of the next byte `read` will return.
    fn position(&self) -> u64;

    /// Moves back to offset 0.
    ///
    /// Must succeed without doing anything when [`position`](Self::position)
    /// is already 0, even for streams that cannot seek.
    ///
    /// # Errors
    ///
    /// [`StreamError::NotSeekable`] for forward-only streams, or
    /// [`StreamError::Io`] if the seek itself failed.
    fn rewind(&mut self) -> Result<(), StreamError>;
}

impl<T: AsRef<[u8]>> ByteStream for Cursor<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }

    fn position(&self) -> u64 {
        Cursor::position(self)
    }

    fn rewind(&mut self) -> Result<(), StreamError> {
        self.set_position(0);
        Ok(())
    }
}

impl<S: ByteStream + ?Sized> ByteStream for Box<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn position(&self) -> u64 {
        (**self).position()
    }

    fn rewind(&mut self) -> Result<(), StreamError> {
        (**self).rewind()
    }
}

impl<S: ByteStream + ?Sized> ByteStream for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn position(&self) -> u64 {
        (**self).position()
    }

    fn rewind(&mut self) -> Result<(), StreamError> {
        (**self).rewind()
    }
}

/// A [`Read`] + [`Seek`] reader, such as a [`File`](std::fs::File).
///
/// The position is counted from construction, so the reader is expected to be
/// at its origin when wrapped.
#[derive(Debug)]
pub struct Seekable<R> {
    inner: R,
    position: u64,
}

impl<R: Read + Seek> Seekable<R> {
    /// Wraps `inner`, which must be positioned at its origin.
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Unwraps the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> ByteStream for Seekable<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.position += n as u64;
        Ok(n)
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn rewind(&mut self) -> Result<(), StreamError> {
        if self.position == 0 {
            return Ok(());
        }
        self.inner.seek(SeekFrom::Start(0))?;
        self.position = 0;
        Ok(())
    }
}

/// A forward-only [`Read`], such as a pipe or socket.
///
/// Rewinding succeeds only while nothing has been read yet.
#[derive(Debug)]
pub struct Forward<R> {
    inner: R,
    position: u64,
}

impl<R: Read> Forward<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Unwraps the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteStream for Forward<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.position += n as u64;
        Ok(n)
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn rewind(&mut self) -> Result<(), StreamError> {
        if self.position == 0 {
            Ok(())
        } else {
            Err(StreamError::NotSeekable {
                position: self.position,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSeek(Cursor<Vec<u8>>);

    impl Read for FailingSeek {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            Read::read(&mut self.0, buf)
        }
    }

    impl Seek for FailingSeek {
        fn seek(&mut self, _: SeekFrom) -> io::Result<u64> {
            Err(io::Error::new(io::ErrorKind::Unsupported, "no seeking"))
        }
    }

    #[test]
    fn forward_rewinds_only_at_origin() {
        let mut s = Forward::new(&b"abc"[..]);
        assert!(s.rewind().is_ok());
        let mut buf = [0u8; 2];
        assert_eq!(ByteStream::read(&mut s, &mut buf).unwrap(), 2);
        assert_eq!(s.position(), 2);
        match s.rewind() {
            Err(StreamError::NotSeekable { position }) => assert_eq!(position, 2),
            other => panic!("expected NotSeekable, got {other:?}"),
        }
    }

    #[test]
    fn seekable_returns_to_origin() {
        let mut s = Seekable::new(Cursor::new(b"abcdef".to_vec()));
        let mut buf = [0u8; 4];
        assert_eq!(ByteStream::read(&mut s, &mut buf).unwrap(), 4);
        s.rewind().unwrap();
        assert_eq!(s.position(), 0);
        assert_eq!(ByteStream::read(&mut s, &mut buf).unwrap(), 4);
        assert_eq!(&buf, b"abcd");
    }

    #[test]
    fn seek_failure_surfaces_io_kind() {
        let mut s = Seekable::new(FailingSeek(Cursor::new(b"xy".to_vec())));
        let mut buf = [0u8; 1];
        ByteStream::read(&mut s, &mut buf).unwrap();
        let err = s.rewind().unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::Unsupported));
        assert_eq!(s.position(), 1);
    }

    #[test]
    fn boxed_stream_delegates() {
        let mut s: Box<dyn ByteStream> = Box::new(Cursor::new("héllo"));
        let mut buf = [0u8; 8];
        assert_eq!(s.read(&mut buf).unwrap(), 6);
        assert_eq!(s.position(), 6);
        s.rewind().unwrap();
        assert_eq!(s.position(), 0);
    }
}
