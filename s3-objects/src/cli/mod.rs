use clap::{Parser, Subcommand};
use object::{BucketCliArgs, ObjectCliArgs, TransferCliArgs};
use provider::aws::AWSConfigCliArgs;
use tracing::info;

use crate::core::client::StorageClient;

pub mod object;
pub mod provider;

#[derive(Parser, Debug)]
#[command(
    name = "s3-objects",
    version,
    about = "List, fetch and store objects in S3 or an S3-compatible store",
    after_help = "Examples:\n  \
    s3-objects --region eu-west-1 list-buckets\n  \
    s3-objects --region eu-west-1 download --bucket b1 --key data.bin --path ./data.bin\n  \
    s3-objects --region us-east-1 --endpoint-url http://localhost:4566 --force-path-style list-objects --bucket b1"
)]
pub struct Cli {
    #[clap(flatten, next_help_heading = "AWS")]
    pub aws_config_args: AWSConfigCliArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List all buckets visible to the resolved identity
    ListBuckets,
    /// List the keys of a bucket (first page only)
    ListObjects {
        #[command(flatten)]
        bucket_args: BucketCliArgs,
    },
    /// Print an object to stdout
    Get {
        #[command(flatten)]
        object_args: ObjectCliArgs,
    },
    /// Save an object to a local file, replacing the file if it exists
    Download {
        #[command(flatten)]
        transfer_args: TransferCliArgs,
    },
    /// Store a local file as an object
    Upload {
        #[command(flatten)]
        transfer_args: TransferCliArgs,
    },
}

/// Run `command` against `client`, writing listings and payloads to `out`.
pub async fn execute<W: std::io::Write>(client: &StorageClient, command: &Commands, out: &mut W) -> color_eyre::Result<()> {
    match command {
        Commands::ListBuckets => {
            for bucket in client.list_buckets().await? {
                writeln!(out, "{}", bucket)?;
            }
        }
        Commands::ListObjects { bucket_args } => {
            for key in client.list_objects(&bucket_args.bucket).await? {
                writeln!(out, "{}", key)?;
            }
        }
        Commands::Get { object_args } => {
            let data = client.get_object(&object_args.bucket, &object_args.key).await?;
            out.write_all(&data)?;
        }
        Commands::Download { transfer_args } => {
            let TransferCliArgs { object, path } = transfer_args;
            client.download_object(&object.bucket, &object.key, path).await?;
            info!("Downloaded {}/{} to {}", object.bucket, object.key, path.display());
        }
        Commands::Upload { transfer_args } => {
            let TransferCliArgs { object, path } = transfer_args;
            client.upload_object(&object.bucket, &object.key, path).await?;
            info!("Uploaded {} to {}/{}", path.display(), object.bucket, object.key);
        }
    }
    out.flush()?;
    Ok(())
}
