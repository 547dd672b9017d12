//! HTTP/HTTPS sized reader

use crate::{SizedSource, SourceError};
use anyhow::{Context, Result};
use sizeio::SizedReadCloser;
use std::io::Cursor;

/// Fetches a resource over HTTP/HTTPS
pub struct HttpFileReader;

impl HttpFileReader {
    /// Fetch an HTTP or HTTPS URL and return its body as a sized reader
    ///
    /// The body is buffered in memory, so the size is the number of bytes
    /// received rather than the advertised `Content-Length`.
    pub async fn open(url: &str) -> Result<SizedSource> {
        let client = reqwest::Client::new();

        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch URL: {url}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let advertised = response.content_length();

        // Reading the whole body avoids bridging a live async stream into a sync reader
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from: {url}"))?;

        let size = body_size(advertised, bytes.len());
        tracing::debug!("Fetched {} bytes from: {}", size, url);

        Ok(SizedReadCloser::new(Cursor::new(bytes), size).boxed())
    }
}

/// Size of a buffered body. The bytes actually received win over the header.
fn body_size(advertised: Option<u64>, received: usize) -> u64 {
    let received = received as u64;
    if let Some(advertised) = advertised.filter(|len| *len != received) {
        tracing::debug!(
            "Content-Length {} differs from {} bytes received",
            advertised,
            received
        );
    }
    received
}
