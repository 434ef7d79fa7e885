//! High-level pipeline: orchestrates enumerate → transform → publish.
//!
//! One run walks the bucket's key namespace, builds the sitemap document from
//! the discovered URLs and publishes it back into the same bucket. The run is
//! strictly sequential (Listing → Building → Publishing) and halts at the
//! first failing stage; there is no retry loop and no partial-completion
//! state, so a failed run leaves the previously published sitemap untouched.
//!
//! An empty listing is not a failure: an empty bucket is a valid site, so the
//! pipeline still publishes the (legal) empty sitemap and reports zero URLs
//! on the success value for the invoking layer to surface.
//!
//! # Error Handling
//! Each stage passes a tagged result to its caller; [`PipelineError`]
//! variants name the failing stage. No subsequent stage runs after a
//! failure. Callers must surface errors for a human-initiated retry.
//!
//! # Callable From
//! - The CLI binary and integration tests; both inject an [`ObjectStore`]
//!   implementation (real client or mock).

use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::{BucketReference, ConfigError};
use crate::contract::{ObjectStore, StoreError};
use crate::lister::list_urls;
use crate::publisher::{publish, PublishError, PublishedArtifact};
use crate::sitemap::SitemapDocument;

/// First failure of a pipeline run, tagged by stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid bucket reference: {0}")]
    Config(#[from] ConfigError),
    #[error("listing rejected: {0}")]
    Credentials(StoreError),
    #[error("listing failed: {0}")]
    List(StoreError),
    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),
}

/// Run one full sitemap regeneration against `bucket` in `region`.
///
/// `prefix` narrows the listing pass; pass an empty string to include every
/// key. On success the returned artifact carries the sitemap's public
/// address and the number of URLs it describes.
pub async fn run_sitemap_pipeline<S>(
    store: &S,
    bucket: &str,
    region: &str,
    prefix: &str,
) -> Result<PublishedArtifact, PipelineError>
where
    S: ObjectStore + ?Sized,
{
    let bucket = BucketReference::new(bucket, region)?;
    bucket.trace_loaded();
    info!(bucket = %bucket.name(), "Starting sitemap pipeline");

    // --- Stage 1: Listing ---
    let urls = match list_urls(store, &bucket, prefix).await {
        Ok(urls) => urls,
        Err(e @ StoreError::Credentials(_)) => {
            error!(error = ?e, "Listing halted: credentials rejected");
            return Err(PipelineError::Credentials(e));
        }
        Err(e) => {
            error!(error = ?e, "Listing failed");
            return Err(PipelineError::List(e));
        }
    };
    if urls.is_empty() {
        warn!(bucket = %bucket.name(), "Listing yielded no URLs; publishing an empty sitemap");
    }

    // --- Stage 2: Building ---
    let document = SitemapDocument::from_urls(urls);
    info!(urls = document.len(), "Sitemap document built");

    // --- Stage 3: Publishing ---
    let artifact = publish(store, &bucket, &document).await?;

    info!(address = %artifact.address, "Sitemap pipeline complete");
    Ok(artifact)
}
