use std::path::PathBuf;

use clap::Parser as _;
use rstest::*;
use tempfile::TempDir;

use crate::cli::{execute, Cli, Commands};
use crate::tests::common::{client_over, seeded_transport, InMemoryTransport, SEED_BUCKET, SEED_KEY, SEED_PAYLOAD};
use crate::types::params::AWSCredentials;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments should parse")
}

#[rstest]
fn global_flags_map_onto_credentials() {
    let cli = parse(&[
        "s3-objects",
        "--region",
        "eu-central-1",
        "--endpoint-url",
        "http://localhost:4566",
        "--force-path-style",
        "list-buckets",
    ]);

    let credentials = AWSCredentials::from(cli.aws_config_args);
    assert_eq!(
        credentials,
        AWSCredentials::new("eu-central-1").with_endpoint_url("http://localhost:4566").with_force_path_style(true)
    );
    assert!(matches!(cli.command, Commands::ListBuckets));
}

#[rstest]
fn profile_and_lazy_credentials_flags_are_forwarded() {
    let cli = parse(&["s3-objects", "--region", "r", "--profile", "dev", "--lazy-credentials", "list-buckets"]);

    let credentials = AWSCredentials::from(cli.aws_config_args);
    assert_eq!(credentials, AWSCredentials::new("r").with_profile("dev").with_lazy_credentials(true));
}

#[rstest]
#[case::list_objects(&["s3-objects", "--region", "r", "list-objects"])]
#[case::get(&["s3-objects", "--region", "r", "get", "--bucket", "b1"])]
#[case::upload(&["s3-objects", "--region", "r", "upload", "--bucket", "b1", "--key", "k"])]
fn subcommands_require_their_arguments(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
fn transfer_arguments_are_parsed() {
    let cli = parse(&["s3-objects", "--region", "r", "download", "--bucket", "b1", "--key", "data.bin", "--path", "/tmp/out.bin"]);

    match cli.command {
        Commands::Download { transfer_args } => {
            assert_eq!(transfer_args.object.bucket, "b1");
            assert_eq!(transfer_args.object.key, "data.bin");
            assert_eq!(transfer_args.path, PathBuf::from("/tmp/out.bin"));
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[rstest]
#[tokio::test]
async fn listings_are_printed_one_per_line(seeded_transport: InMemoryTransport) {
    let (client, _) = client_over(seeded_transport.with_object(SEED_BUCKET, "z.bin", vec![9]));
    let mut out = Vec::new();

    let cli = parse(&["s3-objects", "--region", "r", "list-objects", "--bucket", SEED_BUCKET]);
    execute(&client, &cli.command, &mut out).await.unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\nz.bin\n", SEED_KEY));
}

#[rstest]
#[tokio::test]
async fn get_writes_the_raw_payload(seeded_transport: InMemoryTransport) {
    let (client, _) = client_over(seeded_transport);
    let mut out = Vec::new();

    let cli = parse(&["s3-objects", "--region", "r", "get", "--bucket", SEED_BUCKET, "--key", SEED_KEY]);
    execute(&client, &cli.command, &mut out).await.unwrap();

    assert_eq!(out, SEED_PAYLOAD);
}

#[rstest]
#[tokio::test]
async fn upload_command_stores_the_file(seeded_transport: InMemoryTransport) {
    let (client, transport) = client_over(seeded_transport);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("in.bin");
    tokio::fs::write(&path, b"payload").await.unwrap();
    let path = path.to_str().unwrap();

    let cli = parse(&["s3-objects", "--region", "r", "upload", "--bucket", SEED_BUCKET, "--key", "up.bin", "--path", path]);
    execute(&client, &cli.command, &mut Vec::new()).await.unwrap();

    assert_eq!(transport.stored(SEED_BUCKET, "up.bin").unwrap().as_ref(), b"payload");
}

#[rstest]
#[tokio::test]
async fn failures_are_returned_to_the_caller(seeded_transport: InMemoryTransport) {
    let (client, _) = client_over(seeded_transport);

    let cli = parse(&["s3-objects", "--region", "r", "list-objects", "--bucket", "missing-bucket"]);
    assert!(execute(&client, &cli.command, &mut Vec::new()).await.is_err());
}
