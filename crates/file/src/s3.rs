//! S3 sized reader

use crate::{SizedSource, SourceError};
use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use sizeio::{nop_closer, SizedReadCloser};

/// Shared S3 client for efficient operations
///
/// Creating an S3 client is relatively expensive, so this struct allows
/// reusing the client across multiple operations.
pub struct S3Client {
    client: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client from the AWS environment configuration
    pub async fn new() -> Result<Self> {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let client = aws_sdk_s3::Client::new(&sdk_config);
        Ok(Self { client })
    }

    /// Open an S3 object as a sized reader
    ///
    /// The size is the object's content length as reported by S3. The body is
    /// streamed, so the reader must be used from a blocking context.
    pub async fn open_sized(
        &self,
        bucket: &str,
        key: &str,
        buffer_size: usize,
    ) -> Result<SizedSource> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .with_context(|| format!("Failed to fetch object from S3: s3://{bucket}/{key}"))?;

        let size = object_size(response.content_length(), bucket, key)?;

        let stream = response.body.into_async_read();
        let buffered = tokio::io::BufReader::with_capacity(buffer_size, stream);
        let reader = tokio_util::io::SyncIoBridge::new(buffered);

        tracing::debug!("Opened s3://{}/{} ({} bytes)", bucket, key, size);

        Ok(SizedReadCloser::new(nop_closer(reader), size).boxed())
    }
}

/// Convert the signed length S3 reports into a size; missing or negative is an error
fn object_size(content_length: Option<i64>, bucket: &str, key: &str) -> Result<u64, SourceError> {
    content_length
        .and_then(|len| u64::try_from(len).ok())
        .ok_or_else(|| SourceError::UnknownLength(format!("s3://{bucket}/{key}")))
}

/// Reads S3 objects without keeping a client around
pub struct S3FileReader;

impl S3FileReader {
    /// Open an S3 object as a buffered, sync-compatible sized reader
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `key` - S3 object key
    /// * `buffer_size` - Size of the buffer in bytes (e.g., 1MB = 1024 * 1024)
    pub async fn open(bucket: &str, key: &str, buffer_size: usize) -> Result<SizedSource> {
        S3Client::new()
            .await?
            .open_sized(bucket, key, buffer_size)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_size_known() {
        assert_eq!(object_size(Some(17), "bucket", "key").unwrap(), 17);
        assert_eq!(object_size(Some(0), "bucket", "key").unwrap(), 0);
    }

    #[test]
    fn test_object_size_missing() {
        let err = object_size(None, "bucket", "path/file.bin").unwrap_err();
        assert!(matches!(err, SourceError::UnknownLength(_)));
        assert_eq!(
            err.to_string(),
            "Object has no content length: s3://bucket/path/file.bin"
        );
    }

    #[test]
    fn test_object_size_negative() {
        let err = object_size(Some(-1), "bucket", "key").unwrap_err();
        assert!(matches!(err, SourceError::UnknownLength(_)));
    }

    // Fetching objects needs AWS credentials and is not unit tested
}
