use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct BucketCliArgs {
    /// Name of the bucket.
    #[arg(long)]
    pub bucket: String,
}

#[derive(Debug, Clone, Args)]
pub struct ObjectCliArgs {
    /// Name of the bucket.
    #[arg(long)]
    pub bucket: String,

    /// Key of the object inside the bucket.
    #[arg(long)]
    pub key: String,
}

#[derive(Debug, Clone, Args)]
pub struct TransferCliArgs {
    #[clap(flatten)]
    pub object: ObjectCliArgs,

    /// Local file to read from or write to.
    #[arg(long, value_name = "PATH")]
    pub path: PathBuf,
}
