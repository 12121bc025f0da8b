use clap::Args;

/// Parameters used to config AWS.
#[derive(Debug, Clone, Args)]
pub struct AWSConfigCliArgs {
    /// The AWS region the storage client is bound to.
    #[arg(env = "S3_OBJECTS_AWS_REGION", long = "region")]
    pub aws_region: String,

    /// Custom S3 endpoint, for LocalStack or other S3-compatible stores.
    #[arg(env = "S3_OBJECTS_AWS_ENDPOINT_URL", long = "endpoint-url")]
    pub aws_endpoint_url: Option<String>,

    /// Named profile from the shared AWS config files.
    #[arg(env = "S3_OBJECTS_AWS_PROFILE", long = "profile")]
    pub aws_profile: Option<String>,

    /// Use path-style bucket addressing.
    #[arg(env = "S3_OBJECTS_AWS_FORCE_PATH_STYLE", long = "force-path-style")]
    pub aws_force_path_style: bool,

    /// Resolve credentials on the first request rather than while connecting.
    #[arg(env = "S3_OBJECTS_AWS_LAZY_CREDENTIALS", long = "lazy-credentials")]
    pub aws_lazy_credentials: bool,
}
