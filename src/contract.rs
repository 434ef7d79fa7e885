//! # contract: storage seam for the sitemap pipeline
//!
//! This module defines a single trait ([`ObjectStore`]) covering both I/O
//! boundaries of the pipeline: the paginated key-listing read and the
//! single-object overwrite write. The three stages depend only on this trait,
//! so each remains independently testable with injected fakes.
//!
//! ## Interface & Extensibility
//! - Implement [`ObjectStore`] to target a real backend (see `store.rs` for
//!   the AWS S3 client) or a test double.
//! - All methods are async and return [`StoreError`], the only failure
//!   vocabulary the stages understand.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall` so consumers can generate
//!   deterministic mocks for unit/integration tests; the generated
//!   `MockObjectStore` is exported under the `test-export-mocks` feature.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

/// One bounded page of object keys plus the continuation signal.
///
/// `continuation` carries the backend's opaque token when more pages follow;
/// `None` ends the pagination pass. A page with zero keys and a token is
/// legal and must not end the pass.
#[derive(Debug, Clone, Default)]
pub struct ObjectPage {
    /// Keys in the backend's reported order for this page.
    pub keys: Vec<String>,
    /// Opaque token for the next page, if any.
    pub continuation: Option<String>,
}

/// Failures at the storage boundary.
///
/// Credential rejection is the only backend fault the stages distinguish;
/// every other fault is a generic access failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend rejected the caller's credentials: {0}")]
    Credentials(String),
    #[error("storage backend access failed: {0}")]
    Access(String),
}

/// Trait for reading and writing objects in a bucket.
///
/// The implementor owns transport, endpoint resolution and the ambient
/// credential chain; callers pass bucket names and keys only.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch one page of keys under `prefix`, resuming from `continuation`.
    ///
    /// An empty `prefix` matches every key. The page size is the backend's
    /// maximum; callers must keep requesting pages while a continuation
    /// token is returned.
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation: Option<String>,
    ) -> Result<ObjectPage, StoreError>;

    /// Store `body` under `key` with the given content type.
    ///
    /// Full overwrite, never a partial or append write; the backend makes
    /// the overwrite atomic at the object level.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError>;
}
