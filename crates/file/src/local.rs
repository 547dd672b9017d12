//! Local filesystem sized reader

use crate::SizedSource;
use anyhow::{Context, Result};
use sizeio::HasSize;
use std::path::PathBuf;

/// Opens local files with their size taken from filesystem metadata
pub struct LocalFileReader;

impl LocalFileReader {
    /// Open a local file for buffered reading and take its size
    ///
    /// # Arguments
    /// * `path` - Path to the file
    /// * `buffer_size` - Capacity of the read buffer in bytes
    ///
    /// # Example
    /// ```ignore
    /// let reader = LocalFileReader::open(PathBuf::from("data.bin"), 1024 * 1024).await?;
    /// println!("{} bytes to go", reader.size());
    /// ```
    pub async fn open(path: PathBuf, buffer_size: usize) -> Result<SizedSource> {
        let name = path.display().to_string();
        // stat and open are blocking; keep them off the async worker threads
        let reader = tokio::task::spawn_blocking(move || {
            sizeio::open_sized_buffered(&path, buffer_size)
        })
        .await
        .context("File open task failed")?
        .with_context(|| format!("Failed to open file: {name}"))?;

        tracing::debug!("Opened {} ({} bytes)", name, reader.size());

        Ok(reader.boxed())
    }
}
