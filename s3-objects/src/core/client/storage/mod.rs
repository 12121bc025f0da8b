pub mod error;
pub mod s3;
pub mod transport;

use std::path::Path;
use std::sync::Arc;

use aws_config::SdkConfig;
use bytes::Bytes;
pub use error::{StorageError, StorageErrorKind};
use tokio::fs::File;
use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};
use tracing::{debug, instrument};
pub use transport::{ObjectBody, ObjectTransport, UploadSource};

use self::s3::AWSS3;
use crate::core::cloud::CloudProvider;
use crate::types::params::AWSCredentials;

/// Client over a remote object store.
///
/// Holds a single transport handle that is never replaced after construction.
/// Every operation is one independent round trip, errors are always returned
/// to the caller and nothing is retried.
#[derive(Clone)]
pub struct StorageClient {
    transport: Arc<dyn ObjectTransport>,
}

impl std::fmt::Debug for StorageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageClient").finish_non_exhaustive()
    }
}

impl StorageClient {
    /// Resolve the ambient AWS configuration for `region` and build a client.
    ///
    /// No request is sent to the object store; only configuration and
    /// credential sources are resolved.
    pub async fn connect(region: &str) -> Result<Self, StorageError> {
        Self::connect_with(&AWSCredentials::new(region)).await
    }

    /// Same as [`StorageClient::connect`] with explicit connection parameters.
    pub async fn connect_with(credentials: &AWSCredentials) -> Result<Self, StorageError> {
        let provider = CloudProvider::resolve(credentials).await?;
        let client = Self::with_transport(Arc::new(AWSS3::new(provider.get_aws_config(), credentials.force_path_style)));
        debug!(
            log_type = "StorageClient",
            category = "storage_setup",
            provider = %provider,
            region = %credentials.region,
            "Storage client initialised"
        );
        Ok(client)
    }

    /// Build a client on top of an already loaded AWS configuration.
    /// Credentials are loaded once before the client is returned.
    pub async fn from_sdk_config(aws_config: &SdkConfig) -> Result<Self, StorageError> {
        let provider = CloudProvider::from_sdk_config(aws_config.clone(), true).await?;
        Ok(Self::with_transport(Arc::new(AWSS3::new(provider.get_aws_config(), false))))
    }

    pub fn with_transport(transport: Arc<dyn ObjectTransport>) -> Self {
        Self { transport }
    }

    /// Names of all buckets visible to the resolved identity, in the order
    /// returned by the service.
    pub async fn list_buckets(&self) -> Result<Vec<String>, StorageError> {
        let buckets = self.transport.list_buckets().await?;
        debug!(log_type = "StorageClient", category = "storage_call", count = buckets.len(), "Listed buckets");
        Ok(buckets)
    }

    /// Keys stored in `bucket`.
    ///
    /// Only the first page of the listing is returned. Buckets holding more
    /// keys than one page are not fully enumerated.
    pub async fn list_objects(&self, bucket: &str) -> Result<Vec<String>, StorageError> {
        let keys = self.transport.list_objects_page(bucket).await?;
        debug!(
            log_type = "StorageClient",
            category = "storage_call",
            count = keys.len(),
            "Listed objects in {}",
            bucket
        );
        Ok(keys)
    }

    /// Fetch the whole payload of `bucket/key` into memory.
    pub async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
        let mut body = self.transport.open_object(bucket, key).await?;
        let data = read_body(&mut body, bucket, key).await?;
        debug!(
            log_type = "StorageClient",
            category = "storage_call",
            data_bytes = data.len(),
            "Successfully retrieved data from {}, key={}",
            bucket,
            key
        );
        Ok(data)
    }

    /// Fetch `bucket/key` and write it to `local_path`, creating or
    /// truncating the file.
    ///
    /// The write is not atomic: if the transfer fails after the file was
    /// created, its contents are unspecified.
    #[instrument(skip_all, fields(bucket = bucket, key = key))]
    pub async fn download_object(
        &self,
        bucket: &str,
        key: &str,
        local_path: impl AsRef<Path>,
    ) -> Result<(), StorageError> {
        let path = local_path.as_ref();

        let mut body = self.transport.open_object(bucket, key).await?;
        let mut file = File::create(path).await.map_err(StorageError::local(path))?;
        let data = read_body(&mut body, bucket, key).await?;

        file.write_all(&data).await.map_err(StorageError::local(path))?;
        // tokio defers the final write to a background task, errors only surface here
        file.flush().await.map_err(StorageError::local(path))?;

        debug!(
            log_type = "StorageClient",
            category = "storage_call",
            data_bytes = data.len(),
            "Downloaded {}/{} to {}",
            bucket,
            key,
            path.display()
        );
        Ok(())
    }

    /// Store the contents of `local_path` under `bucket/key`.
    ///
    /// A missing or unreadable local file is reported before any remote call.
    #[instrument(skip_all, fields(bucket = bucket, key = key))]
    pub async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        local_path: impl AsRef<Path>,
    ) -> Result<(), StorageError> {
        let path = local_path.as_ref();

        let file = File::open(path).await.map_err(StorageError::local(path))?;
        let length = file.metadata().await.map_err(StorageError::local(path))?.len();

        self.transport.put_object(bucket, key, UploadSource { path: path.to_path_buf(), file, length }).await?;

        debug!(
            log_type = "StorageClient",
            category = "storage_call",
            data_bytes = length,
            "Uploaded {} to {}/{}",
            path.display(),
            bucket,
            key
        );
        Ok(())
    }
}

async fn read_body(body: &mut ObjectBody, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
    let mut buf = Vec::new();
    match body.read_to_end(&mut buf).await {
        Ok(_) => Ok(Bytes::from(buf)),
        Err(source) => Err(StorageError::ObjectStreamError {
            bucket: bucket.to_string(),
            key: key.to_string(),
            bytes_read: buf.len(),
            source,
        }),
    }
}
