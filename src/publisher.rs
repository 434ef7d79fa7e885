//! Publisher: serializes the sitemap document and writes it back to the bucket.
//!
//! The write targets the fixed key `sitemap.xml` as a full overwrite with
//! content type `application/xml`. A failed publish leaves any previous
//! sitemap object unchanged; the backend's overwrite is atomic at the object
//! level, so there is no partial-write recovery to attempt.

use thiserror::Error;
use tracing::{error, info};

use crate::config::{BucketReference, SITEMAP_KEY};
use crate::contract::{ObjectStore, StoreError};
use crate::sitemap::{SitemapDocument, XmlError};

/// Content type tagged onto the stored sitemap object.
pub const SITEMAP_CONTENT_TYPE: &str = "application/xml";

/// The published sitemap's public address plus how many URLs it carries.
///
/// Derived, never stored: the address is recomputed from the bucket
/// reference on every successful publish. `url_count` lets the invoking
/// layer report the empty-sitemap condition without re-reading the bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedArtifact {
    pub address: String,
    pub url_count: usize,
}

/// Failures of the final stage: serialization or the upload itself.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to serialize sitemap document: {0}")]
    Serialize(#[from] XmlError),
    #[error("failed to upload sitemap object: {0}")]
    Upload(#[from] StoreError),
}

/// Serialize `document` and store it at the fixed sitemap key.
///
/// Idempotent: republishing the same document yields identical stored bytes.
/// Exactly one bucket mutation on success, none on failure.
pub async fn publish<S>(
    store: &S,
    bucket: &BucketReference,
    document: &SitemapDocument,
) -> Result<PublishedArtifact, PublishError>
where
    S: ObjectStore + ?Sized,
{
    let body = document.to_xml()?;

    if let Err(e) = store
        .put_object(bucket.name(), SITEMAP_KEY, body, SITEMAP_CONTENT_TYPE)
        .await
    {
        error!(bucket = %bucket.name(), error = ?e, "Sitemap upload failed");
        return Err(PublishError::Upload(e));
    }

    let artifact = PublishedArtifact {
        address: bucket.sitemap_url(),
        url_count: document.len(),
    };
    info!(
        address = %artifact.address,
        urls = artifact.url_count,
        "Sitemap published"
    );
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::MockObjectStore;

    fn bucket() -> BucketReference {
        BucketReference::new("site-x", "eu-central-2").unwrap()
    }

    #[tokio::test]
    async fn uploads_under_the_fixed_key_with_xml_content_type() {
        let doc = SitemapDocument::from_urls(vec![
            "https://site-x.s3.eu-central-2.amazonaws.com/a.html".into(),
        ]);
        let expected_body = doc.to_xml().unwrap();

        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .withf(move |bucket, key, body, content_type| {
                bucket == "site-x"
                    && key == "sitemap.xml"
                    && body == &expected_body
                    && content_type == "application/xml"
            })
            .return_once(|_, _, _, _| Ok(()));

        let artifact = publish(&store, &bucket(), &doc).await.unwrap();
        assert_eq!(
            artifact.address,
            "https://site-x.s3.eu-central-2.amazonaws.com/sitemap.xml"
        );
        assert_eq!(artifact.url_count, 1);
    }

    #[tokio::test]
    async fn upload_failure_becomes_publish_error() {
        let doc = SitemapDocument::from_urls(vec![]);
        let mut store = MockObjectStore::new();
        store
            .expect_put_object()
            .return_once(|_, _, _, _| Err(StoreError::Access("timeout".into())));

        let err = publish(&store, &bucket(), &doc).await.unwrap_err();
        assert!(matches!(err, PublishError::Upload(_)));
    }
}
