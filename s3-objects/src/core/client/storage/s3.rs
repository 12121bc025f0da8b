use std::path::Path;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use super::transport::{ObjectBody, ObjectTransport, UploadSource};
use super::StorageError;

/// S3 transport built on the AWS SDK client.
#[derive(Clone, Debug)]
pub struct AWSS3 {
    client: Client,
}

impl AWSS3 {
    /// Creates a new instance of AWSS3 with the provided AWS configuration.
    /// # Arguments
    /// * `aws_config` - The resolved AWS configuration.
    /// * `force_path_style` - Address buckets as `endpoint/bucket` instead of
    ///   `bucket.endpoint`, needed by LocalStack and most S3-compatible stores.
    ///
    /// # Returns
    /// * `Self` - The new instance of AWSS3.
    pub fn new(aws_config: &SdkConfig, force_path_style: bool) -> Self {
        let s3_config = aws_sdk_s3::config::Builder::from(aws_config).force_path_style(force_path_style).build();
        Self { client: Client::from_conf(s3_config) }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ObjectTransport for AWSS3 {
    async fn list_buckets(&self) -> Result<Vec<String>, StorageError> {
        let output = self.client.list_buckets().send().await?;
        Ok(output.buckets().iter().filter_map(|bucket| bucket.name().map(str::to_string)).collect())
    }

    /// Issues a single `ListObjectsV2` request. A truncated response is
    /// returned as is, the continuation token is not followed.
    async fn list_objects_page(&self, bucket: &str) -> Result<Vec<String>, StorageError> {
        let output = self.client.list_objects_v2().bucket(bucket).send().await?;

        if output.is_truncated().unwrap_or(false) {
            tracing::debug!(
                log_type = "StorageClient",
                category = "storage_call",
                bucket = bucket,
                "Listing of {} is truncated, only the first page is returned",
                bucket
            );
        }

        Ok(output.contents().iter().filter_map(|object| object.key().map(str::to_string)).collect())
    }

    async fn open_object(&self, bucket: &str, key: &str) -> Result<ObjectBody, StorageError> {
        let output = self.client.get_object().bucket(bucket).key(key).send().await?;
        Ok(ObjectBody::new(output.body.into_async_read()))
    }

    async fn put_object(&self, bucket: &str, key: &str, source: UploadSource) -> Result<(), StorageError> {
        let UploadSource { path, file, length } = source;
        let content_length = content_length(&path, length)?;
        let body = ByteStream::read_from()
            .file(file)
            .build()
            .await
            .map_err(|e| StorageError::LocalFileError { path, source: std::io::Error::other(e) })?;

        self.client.put_object().bucket(bucket).key(key).content_length(content_length).body(body).send().await?;
        Ok(())
    }
}

/// `PutObject` carries the length as a signed 64 bit header value.
fn content_length(path: &Path, length: u64) -> Result<i64, StorageError> {
    i64::try_from(length).map_err(|e| StorageError::LocalFileError {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
    })
}
