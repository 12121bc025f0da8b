use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::{BehaviorVersion, Region, SdkConfig};

use crate::cli::provider::aws::AWSConfigCliArgs;

/// Parameters used to resolve an AWS configuration for the storage client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AWSCredentials {
    pub region: String,
    /// Custom S3 endpoint, e.g. LocalStack or MinIO
    pub endpoint_url: Option<String>,
    /// Named profile from the shared config files, credentials are read from it only
    pub profile: Option<String>,
    pub force_path_style: bool,
    /// Defer credential resolution to the first request instead of connecting
    pub lazy_credentials: bool,
}

impl AWSCredentials {
    pub fn new(region: impl Into<String>) -> Self {
        Self { region: region.into(), ..Default::default() }
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_lazy_credentials(mut self, lazy_credentials: bool) -> Self {
        self.lazy_credentials = lazy_credentials;
        self
    }

    pub fn with_force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    /// Load the default provider chain (environment, profile, web identity,
    /// container and instance metadata) bound to `self.region`.
    ///
    /// A named profile replaces the credentials chain, so a missing profile
    /// is not masked by credentials found elsewhere.
    pub async fn get_aws_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(Region::new(self.region.clone()));
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        if let Some(profile) = &self.profile {
            loader = loader
                .profile_name(profile)
                .credentials_provider(ProfileFileCredentialsProvider::builder().profile_name(profile).build());
        }
        loader.load().await
    }
}

impl From<AWSConfigCliArgs> for AWSCredentials {
    fn from(args: AWSConfigCliArgs) -> Self {
        Self {
            region: args.aws_region,
            endpoint_url: args.aws_endpoint_url,
            profile: args.aws_profile,
            force_path_style: args.aws_force_path_style,
            lazy_credentials: args.aws_lazy_credentials,
        }
    }
}
