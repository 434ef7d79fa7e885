//! s3-sitemap: regenerate and republish a static site's sitemap.xml.
//!
//! This crate enumerates every object key in an S3 bucket, maps each key to
//! its public URL, assembles a sitemap-protocol document and writes it back
//! into the same bucket under the fixed key `sitemap.xml`.
//!
//! The three stages (lister → sitemap builder → publisher) share a single
//! storage seam, [`contract::ObjectStore`], so each is testable against an
//! injected fake; `store` provides the real AWS client.

pub mod config;
pub mod contract;
pub mod lister;
pub mod pipeline;
pub mod publisher;
pub mod sitemap;
pub mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pipeline::run_sitemap_pipeline;
use store::S3ObjectStore;

#[derive(Parser)]
#[clap(
    name = "s3-sitemap",
    version,
    about = "Rebuild and republish the sitemap.xml for a static site hosted in an S3 bucket"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild the sitemap from the bucket's current keys and publish it
    Generate {
        /// Target S3 bucket name
        #[clap(long, default_value = "esam-micromegas")]
        bucket: String,
        /// AWS region hosting the bucket
        #[clap(long, default_value = "eu-central-2")]
        region: String,
        /// Only include objects whose keys start with this prefix
        #[clap(long, default_value = "")]
        prefix: String,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    match cli.command {
        Commands::Generate {
            bucket,
            region,
            prefix,
        } => {
            let store = S3ObjectStore::connect(&region).await;
            println!("Sitemap generation starting...");
            match run_sitemap_pipeline(&store, &bucket, &region, &prefix).await {
                Ok(artifact) => {
                    if artifact.url_count == 0 {
                        println!("No objects found under the given bucket/prefix; published an empty sitemap.");
                    }
                    println!("Sitemap updated: {}", artifact.address);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("[ERROR] Sitemap generation failed: {}", e);
                    Err(anyhow::Error::new(e))
                }
            }
        }
    }
}
