// Client abstractions module - contains the object storage client and its transport

pub mod storage;

// Re-export commonly used types
pub use storage::{s3::AWSS3, ObjectTransport, StorageClient};
