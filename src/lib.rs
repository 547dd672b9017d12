//! sizeio
//!
//! Readers that can tell the size of the content they deliver, without
//! consuming it.
//!
//! # Sized Readers
//!
//! - [`SizedReader`] - any [`std::io::Read`] paired with a byte count
//! - [`SizedReadCloser`] - the same for readers that must be closed explicitly
//! - [`MaybeSized`] - a reader whose size may be unknown
//!
//! In-memory cursors report their size out of the box. Local files can be
//! opened or converted with their size taken from the filesystem:
//!
//! ```no_run
//! use sizeio::{open_sized, HasSize};
//! use std::io::Read;
//!
//! let mut reader = open_sized("demo/test.txt")?;
//! let mut content = String::new();
//! reader.read_to_string(&mut content)?;
//! assert_eq!(reader.size(), content.len() as u64);
//! reader.close()?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Other readers get a size attached by hand:
//!
//! ```
//! use sizeio::{wrap_reader, HasSize};
//! use std::io::Cursor;
//!
//! let reader = wrap_reader(Cursor::new("content"), 7);
//! assert_eq!(reader.size(), 7);
//! ```
//!
//! # Limitations
//!
//! The size is never checked against the bytes actually read. A declared size
//! can be wrong, and a file can change after its size was taken.

mod close;
mod file;
mod maybe;
mod reader;
mod size;

pub use close::{nop_closer, Close, NopCloser, ReadClose};
pub use file::{open_sized, open_sized_buffered, size_from_handle, MeasureLen};
pub use maybe::MaybeSized;
pub use reader::{
    wrap_closable_reader, wrap_reader, ReadCloseWithSize, SizedReadCloser, SizedReader,
};
pub use size::{stream_len, HasSize, ReadWithSize};
