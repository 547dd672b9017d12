//! Readers whose size may or may not be known

use crate::reader::SizedReader;
use crate::size::HasSize;
use std::io::{self, Read};

/// A reader that may carry the size of its content.
///
/// Lets code accept both sized and plain readers through one type and ask
/// at runtime whether the size is available.
#[derive(Debug)]
pub enum MaybeSized<R> {
    Known(SizedReader<R>),
    Unknown(R),
}

impl<R> MaybeSized<R> {
    pub fn new(reader: R, size: Option<u64>) -> Self {
        match size {
            Some(size) => MaybeSized::Known(SizedReader::new(reader, size)),
            None => MaybeSized::Unknown(reader),
        }
    }

    pub fn size(&self) -> Option<u64> {
        match self {
            MaybeSized::Known(reader) => Some(reader.size()),
            MaybeSized::Unknown(_) => None,
        }
    }

    pub fn into_inner(self) -> R {
        match self {
            MaybeSized::Known(reader) => reader.into_inner(),
            MaybeSized::Unknown(reader) => reader,
        }
    }
}

impl<R> From<SizedReader<R>> for MaybeSized<R> {
    fn from(reader: SizedReader<R>) -> Self {
        MaybeSized::Known(reader)
    }
}

impl<R: Read> Read for MaybeSized<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            MaybeSized::Known(reader) => reader.read(buf),
            MaybeSized::Unknown(reader) => reader.read(buf),
        }
    }
}
