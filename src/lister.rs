//! Object Lister: paginates a bucket's key namespace into public URLs.
//!
//! One listing pass walks the backend's pages lazily, one request at a time,
//! and emits a public URL per key. The result is a snapshot of the bucket at
//! call time; memory is bounded by a single page plus the accumulated URLs.

use tracing::{debug, info};

use crate::config::BucketReference;
use crate::contract::{ObjectStore, StoreError};

/// Enumerate every key under `prefix` and map each to its public URL.
///
/// Page order and within-page order are preserved. An empty bucket/prefix is
/// `Ok` with an empty collection, not an error; the only distinguished
/// failure is [`StoreError::Credentials`], everything else propagates as a
/// generic access fault. Read-only: no bucket mutation.
pub async fn list_urls<S>(
    store: &S,
    bucket: &BucketReference,
    prefix: &str,
) -> Result<Vec<String>, StoreError>
where
    S: ObjectStore + ?Sized,
{
    let mut urls: Vec<String> = Vec::new();
    let mut continuation: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = store
            .list_page(bucket.name(), prefix, continuation.take())
            .await?;
        pages += 1;
        debug!(page = pages, keys = page.keys.len(), "Fetched listing page");

        // A page may be empty under prefix filtering; pagination continues
        // until the backend stops returning a token.
        for key in &page.keys {
            urls.push(bucket.object_url(key));
        }

        match page.continuation {
            Some(token) => continuation = Some(token),
            None => break,
        }
    }

    info!(
        bucket = %bucket.name(),
        urls = urls.len(),
        pages,
        "Listing pass complete"
    );
    Ok(urls)
}
