use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use s3_sitemap::{run, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(_) => std::process::exit(1),
    }
}
