//! Sized readers over local files
//!
//! The size is taken from the filesystem when the reader is built. If the file
//! changes afterwards, reading it may deliver more or fewer bytes than
//! `size()` reports.

use crate::close::Close;
use crate::reader::SizedReadCloser;
use crate::size::HasSize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Handles that can report the current length of what they point to
pub trait MeasureLen {
    fn measure_len(&self) -> io::Result<u64>;
}

impl MeasureLen for File {
    fn measure_len(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }
}

impl<R: MeasureLen> MeasureLen for BufReader<R> {
    fn measure_len(&self) -> io::Result<u64> {
        self.get_ref().measure_len()
    }
}

/// Open the file at `path` for reading and take its size right away.
///
/// Close the returned reader when done with it. Open and stat errors are
/// returned as they come from the OS.
pub fn open_sized<P: AsRef<Path>>(path: P) -> io::Result<SizedReadCloser<File>> {
    let file = File::open(path.as_ref())?;
    let reader = size_from_handle(file)?;
    tracing::debug!(
        "Opened {} with size {}",
        path.as_ref().display(),
        reader.size()
    );
    Ok(reader)
}

/// Like [`open_sized`], reading through a buffer of `capacity` bytes
pub fn open_sized_buffered<P: AsRef<Path>>(
    path: P,
    capacity: usize,
) -> io::Result<SizedReadCloser<BufReader<File>>> {
    let file = File::open(path.as_ref())?;
    size_from_handle(BufReader::with_capacity(capacity, file))
}

/// Take the size of an already open handle and wrap it.
///
/// The handle is owned by the returned reader from now on. If its size cannot
/// be determined, the handle is closed before the error is returned.
pub fn size_from_handle<H>(handle: H) -> io::Result<SizedReadCloser<H>>
where
    H: Read + Close + MeasureLen,
{
    match handle.measure_len() {
        Ok(size) => Ok(SizedReadCloser::new(handle, size)),
        Err(err) => {
            // the measurement error is the one worth reporting
            let _ = handle.close();
            Err(err)
        }
    }
}
