use clap::Parser;

use s3_sitemap::{Cli, Commands};

#[test]
fn generate_parses_bucket_region_and_prefix() {
    let cli = Cli::try_parse_from([
        "s3-sitemap",
        "generate",
        "--bucket",
        "site-x",
        "--region",
        "eu-central-2",
        "--prefix",
        "docs/",
    ])
    .expect("valid invocation must parse");

    let Commands::Generate {
        bucket,
        region,
        prefix,
    } = cli.command;
    assert_eq!(bucket, "site-x");
    assert_eq!(region, "eu-central-2");
    assert_eq!(prefix, "docs/");
}

#[test]
fn generate_falls_back_to_defaults() {
    let cli = Cli::try_parse_from(["s3-sitemap", "generate"]).expect("defaults must apply");

    let Commands::Generate {
        bucket,
        region,
        prefix,
    } = cli.command;
    assert_eq!(bucket, "esam-micromegas");
    assert_eq!(region, "eu-central-2");
    assert_eq!(prefix, "");
}

#[test]
fn a_subcommand_is_required() {
    assert!(Cli::try_parse_from(["s3-sitemap"]).is_err());
}
