use aws_config::SdkConfig;
use aws_credential_types::provider::ProvideCredentials as _;

use crate::core::client::storage::StorageError;
use crate::types::params::AWSCredentials;

/// Cloud provider
/// This enum represents the resolved configuration the storage client is bound to.
#[derive(Clone)]
pub enum CloudProvider {
    AWS(Box<SdkConfig>),
}

impl CloudProvider {
    /// Resolve the AWS configuration described by `credentials`.
    ///
    /// # Errors
    /// Returns [`StorageError::ConfigError`] if the region is empty, if no
    /// credentials provider can be resolved, or if loading the credentials
    /// fails. Loading is skipped when `lazy_credentials` is set.
    pub async fn resolve(credentials: &AWSCredentials) -> Result<Self, StorageError> {
        if credentials.region.trim().is_empty() {
            return Err(StorageError::ConfigError("region must not be empty".to_string()));
        }
        let config = credentials.get_aws_config().await;
        Self::from_sdk_config(config, !credentials.lazy_credentials).await
    }

    /// Validate an already loaded configuration.
    pub async fn from_sdk_config(config: SdkConfig, eager_credentials: bool) -> Result<Self, StorageError> {
        if config.region().is_none() {
            return Err(StorageError::ConfigError("no region could be resolved".to_string()));
        }
        let Some(provider) = config.credentials_provider() else {
            return Err(StorageError::ConfigError("no credentials provider could be resolved".to_string()));
        };

        if eager_credentials {
            provider
                .provide_credentials()
                .await
                .map_err(|e| StorageError::ConfigError(format!("failed to load credentials: {e}")))?;
        }

        Ok(Self::AWS(Box::new(config)))
    }

    /// Get the AWS SDK config
    pub fn get_aws_config(&self) -> &SdkConfig {
        match self {
            Self::AWS(config) => config.as_ref(),
        }
    }

    pub fn get_provider_name(&self) -> String {
        match self {
            CloudProvider::AWS(_) => "AWS".to_string(),
        }
    }
}

impl std::fmt::Debug for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.get_provider_name().as_str())
    }
}

// Implement Display using Debug since they share the same formatting
impl std::fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
