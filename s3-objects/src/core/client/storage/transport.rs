use std::fmt;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncRead, ReadBuf};

use super::StorageError;

/// Open response stream of a remote object.
///
/// The underlying connection is held until the body is dropped, so every
/// acquisition is released exactly once when its owner goes out of scope.
pub struct ObjectBody {
    inner: Pin<Box<dyn AsyncRead + Send>>,
}

impl ObjectBody {
    pub fn new(reader: impl AsyncRead + Send + 'static) -> Self {
        Self { inner: Box::pin(reader) }
    }
}

impl AsyncRead for ObjectBody {
    fn poll_read(mut self: Pin<&mut Self>, cx: &mut Context<'_>, buf: &mut ReadBuf<'_>) -> Poll<std::io::Result<()>> {
        self.inner.as_mut().poll_read(cx, buf)
    }
}

impl fmt::Debug for ObjectBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectBody").finish_non_exhaustive()
    }
}

/// A local file opened for reading, handed to the transport as a put payload.
#[derive(Debug)]
pub struct UploadSource {
    pub path: PathBuf,
    pub file: File,
    /// Size of the file at the time it was opened
    pub length: u64,
}

/// Capability handle over a remote object store.
///
/// Implementations issue exactly one request per call and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectTransport: Send + Sync {
    /// Names of all buckets visible to the resolved identity
    async fn list_buckets(&self) -> Result<Vec<String>, StorageError>;

    /// Keys of the first listing page of `bucket`
    async fn list_objects_page(&self, bucket: &str) -> Result<Vec<String>, StorageError>;

    /// Open the body of `bucket/key` for reading
    async fn open_object(&self, bucket: &str, key: &str) -> Result<ObjectBody, StorageError>;

    /// Store the full contents of `source` under `bucket/key`
    async fn put_object(&self, bucket: &str, key: &str, source: UploadSource) -> Result<(), StorageError>;
}
