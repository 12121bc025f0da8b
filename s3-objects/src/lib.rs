pub mod cli;
pub mod core;
pub mod types;
pub mod utils;


// Re-export commonly used items
pub use crate::core::client::storage::{StorageClient, StorageError, StorageErrorKind};
pub use crate::types::params::AWSCredentials;
