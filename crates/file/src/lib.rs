//! Sized readers over local files, S3 objects and HTTP/HTTPS resources
//!
//! Every constructor returns a [`SizedSource`]: a closable reader that reports
//! the size of the content it will deliver before any of it is read.
//!
//! # Source Types
//!
//! - **Local**: sized from filesystem metadata
//! - **S3**: sized from the object's content length
//! - **HTTP/HTTPS**: sized from the received body
//!
//! # Example
//!
//! ```ignore
//! use sizeio::HasSize;
//! use sizeio_file::{HttpFileReader, LocalFileReader, DEFAULT_BUFFER_SIZE};
//!
//! let mut local = LocalFileReader::open("data.bin".into(), DEFAULT_BUFFER_SIZE).await?;
//! let mut remote = HttpFileReader::open("https://example.com/data.bin").await?;
//! println!("{} + {} bytes", local.size(), remote.size());
//! local.close()?;
//! remote.close()?;
//! ```

mod error;
mod http;
mod local;
mod s3;

use sizeio::{ReadClose, SizedReadCloser};

pub use error::SourceError;
pub use http::HttpFileReader;
pub use local::LocalFileReader;
pub use s3::{S3Client, S3FileReader};

/// Default buffer size for reading operations (1MB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// A sized reader over any kind of source
pub type SizedSource = SizedReadCloser<Box<dyn ReadClose + Send>>;
