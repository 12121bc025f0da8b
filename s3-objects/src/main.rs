use clap::Parser as _;
use dotenvy::dotenv;
use s3_objects::cli::{execute, Cli};
use s3_objects::utils::logging::init_logging;
use s3_objects::{AWSCredentials, StorageClient};
use tracing::{debug, error};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    dotenv().ok();
    init_logging()?;
    let cli = Cli::parse();
    debug!("Executing command with args: {:?}", cli);

    let credentials = AWSCredentials::from(cli.aws_config_args.clone());
    let result = match StorageClient::connect_with(&credentials).await {
        Ok(client) => execute(&client, &cli.command, &mut std::io::stdout().lock()).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = &result {
        error!(error = %e, error_chain = ?e, "Failed to execute {:?}", cli.command);
    }
    result
}
