//! Readers decorated with the size of their content

use crate::close::{Close, ReadClose};
use crate::size::{stream_len, HasSize, ReadWithSize};
use std::io::{self, BufRead, IoSliceMut, Read, Seek};

/// A reader paired with the size of the content it delivers.
///
/// The size is stored once and never checked against what the delegate
/// actually produces. Reading past it, or stopping short of it, is not an error.
#[derive(Debug, Clone)]
pub struct SizedReader<R> {
    inner: R,
    size: u64,
}

/// Add the size capability to a reader.
pub fn wrap_reader<R: Read>(reader: R, size: u64) -> SizedReader<R> {
    SizedReader::new(reader, size)
}

impl<R> SizedReader<R> {
    pub fn new(inner: R, size: u64) -> Self {
        Self { inner, size }
    }

    /// Wrap a reader that already knows its size, capturing that size now
    pub fn from_sized(inner: R) -> Self
    where
        R: HasSize,
    {
        let size = inner.size();
        Self { inner, size }
    }

    /// Measure the bytes left between the current position and the end of a
    /// seekable reader, without moving it, and wrap it with that size
    pub fn from_seekable(mut inner: R) -> io::Result<Self>
    where
        R: Seek,
    {
        let size = stream_len(&mut inner)?;
        Ok(Self { inner, size })
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> HasSize for SizedReader<R> {
    fn size(&self) -> u64 {
        self.size
    }
}

impl<R: Read> Read for SizedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }

    fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
        self.inner.read_vectored(bufs)
    }

    fn read_to_end(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.inner.read_to_end(buf)
    }
}

impl<R: BufRead> BufRead for SizedReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

/// A reader that also reports its size and can be closed explicitly.
pub trait ReadCloseWithSize: ReadWithSize {
    /// Close the delegate. Later calls are no-ops.
    fn close(&mut self) -> io::Result<()>;

    fn is_closed(&self) -> bool;
}

/// A closable reader paired with the size of the content it delivers.
///
/// Closing releases the delegate and reports its close error. The size stays
/// available after closing; reading does not.
#[derive(Debug)]
pub struct SizedReadCloser<R> {
    inner: Option<R>,
    size: u64,
}

/// Add the size capability to a closable reader.
pub fn wrap_closable_reader<R: Read + Close>(reader: R, size: u64) -> SizedReadCloser<R> {
    SizedReadCloser::new(reader, size)
}

impl<R> SizedReadCloser<R> {
    pub fn new(inner: R, size: u64) -> Self {
        Self {
            inner: Some(inner),
            size,
        }
    }

    /// Wrap a closable reader that already knows its size
    pub fn from_sized(inner: R) -> Self
    where
        R: HasSize,
    {
        let size = inner.size();
        Self::new(inner, size)
    }

    /// The delegate, unless the reader was closed
    pub fn get_ref(&self) -> Option<&R> {
        self.inner.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut R> {
        self.inner.as_mut()
    }

    /// Take the delegate back without closing it
    pub fn into_inner(self) -> Option<R> {
        self.inner
    }

    fn delegate(&mut self) -> io::Result<&mut R> {
        self.inner
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "read on closed reader"))
    }
}

impl<R: Read + Close + Send + 'static> SizedReadCloser<R> {
    /// Erase the delegate type, keeping the size
    pub fn boxed(self) -> SizedReadCloser<Box<dyn ReadClose + Send>> {
        SizedReadCloser {
            inner: self
                .inner
                .map(|inner| Box::new(inner) as Box<dyn ReadClose + Send>),
            size: self.size,
        }
    }
}

impl SizedReadCloser<io::Empty> {
    /// A reader with nothing behind it, reporting `size`.
    pub fn empty(size: u64) -> Self {
        Self::new(io::empty(), size)
    }
}

impl<R: Close> SizedReadCloser<R> {
    /// Close the delegate and report its error, if any.
    ///
    /// The delegate is released even when closing it fails.
    pub fn close(&mut self) -> io::Result<()> {
        match self.inner.take() {
            Some(inner) => inner.close(),
            None => Ok(()),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }
}

impl<R> HasSize for SizedReadCloser<R> {
    fn size(&self) -> u64 {
        self.size
    }
}

impl<R: Read> Read for SizedReadCloser<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.delegate()?.read(buf)
    }

    fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
        self.delegate()?.read_vectored(bufs)
    }

    fn read_to_end(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.delegate()?.read_to_end(buf)
    }
}

impl<R: BufRead> BufRead for SizedReadCloser<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.delegate()?.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        if let Some(inner) = self.inner.as_mut() {
            inner.consume(amt)
        }
    }
}

impl<R: Read + Close> ReadCloseWithSize for SizedReadCloser<R> {
    fn close(&mut self) -> io::Result<()> {
        SizedReadCloser::close(self)
    }

    fn is_closed(&self) -> bool {
        SizedReadCloser::is_closed(self)
    }
}
