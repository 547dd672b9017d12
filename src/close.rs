//! Explicit, error-reporting release of a reader's resources

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};

/// Releases the resources held by a reader and reports any failure doing so.
///
/// Dropping a reader also releases it, but silently. `close` consumes the
/// reader, so a delegate can never be closed twice through this trait.
pub trait Close {
    fn close(self) -> io::Result<()>;
}

#[cfg(unix)]
impl Close for File {
    fn close(self) -> io::Result<()> {
        use std::os::unix::io::IntoRawFd;

        let fd = self.into_raw_fd();
        // SAFETY: `into_raw_fd` handed us sole ownership of `fd`; it is not used again.
        if unsafe { libc::close(fd) } == 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }
}

#[cfg(not(unix))]
impl Close for File {
    fn close(self) -> io::Result<()> {
        drop(self);
        Ok(())
    }
}

impl<R: Read + Close> Close for BufReader<R> {
    fn close(self) -> io::Result<()> {
        self.into_inner().close()
    }
}

impl<T> Close for Cursor<T> {
    fn close(self) -> io::Result<()> {
        Ok(())
    }
}

impl Close for io::Empty {
    fn close(self) -> io::Result<()> {
        Ok(())
    }
}

/// Object-safe form of `Read + Close`, for delegates whose concrete type is erased.
pub trait ReadClose: Read {
    fn close_boxed(self: Box<Self>) -> io::Result<()>;
}

impl<T: Read + Close> ReadClose for T {
    fn close_boxed(self: Box<Self>) -> io::Result<()> {
        (*self).close()
    }
}

impl Close for Box<dyn ReadClose + Send> {
    fn close(self) -> io::Result<()> {
        self.close_boxed()
    }
}

/// A reader with nothing to release; closing it always succeeds.
#[derive(Debug, Default, Clone)]
pub struct NopCloser<R> {
    inner: R,
}

impl<R> NopCloser<R> {
    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Make `reader` usable where a closable delegate is required.
pub fn nop_closer<R: Read>(reader: R) -> NopCloser<R> {
    NopCloser { inner: reader }
}

impl<R: Read> Read for NopCloser<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R> Close for NopCloser<R> {
    fn close(self) -> io::Result<()> {
        Ok(())
    }
}
