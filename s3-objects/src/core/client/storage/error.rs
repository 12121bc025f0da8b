use std::path::PathBuf;

use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::list_buckets::ListBucketsError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use aws_sdk_s3::operation::put_object::PutObjectError;
use thiserror::Error;

/// Coarse classification of a [`StorageError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    /// Region or credential resolution failed, no client was built.
    Configuration,
    /// The remote service rejected or failed the request.
    RemoteRequest,
    /// Opening, creating, reading or writing a local file failed.
    LocalIo,
    /// A remote body stream broke after the request was accepted.
    PartialTransfer,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to resolve storage configuration: {0}")]
    ConfigError(String),
    /// AWS SDK error
    #[error("Failed to list buckets: {0}")]
    ListBucketsError(#[from] SdkError<ListBucketsError>),
    #[error("Failed to list objects: {0}")]
    ListObjectsError(#[from] SdkError<ListObjectsV2Error>),
    #[error("Failed to get data from S3: {0}")]
    GetObjectError(#[from] SdkError<GetObjectError>),
    #[error("Failed to put object : {0}")]
    UnableToPutObject(#[from] SdkError<PutObjectError>),
    #[error("Local file error on {}: {source}", path.display())]
    LocalFileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to stream object {bucket}/{key} after {bytes_read} bytes: {source}")]
    ObjectStreamError {
        bucket: String,
        key: String,
        bytes_read: usize,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub fn kind(&self) -> StorageErrorKind {
        match self {
            Self::ConfigError(_) => StorageErrorKind::Configuration,
            Self::ListBucketsError(_)
            | Self::ListObjectsError(_)
            | Self::GetObjectError(_)
            | Self::UnableToPutObject(_) => StorageErrorKind::RemoteRequest,
            Self::LocalFileError { .. } => StorageErrorKind::LocalIo,
            Self::ObjectStreamError { .. } => StorageErrorKind::PartialTransfer,
        }
    }

    pub(crate) fn local(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::LocalFileError { path, source }
    }
}
