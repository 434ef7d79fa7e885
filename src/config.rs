//! Bucket configuration: the single value threaded through every pipeline stage.
//!
//! A [`BucketReference`] identifies the target bucket and its network endpoint
//! and owns the pure URL derivations the stages rely on. It is constructed once
//! from caller-supplied values, validated up front, and passed by reference
//! through listing, building and publishing so all three stages agree on the
//! audience the sitemap describes.

use thiserror::Error;
use tracing::info;

/// Fixed key the published sitemap is stored under.
pub const SITEMAP_KEY: &str = "sitemap.xml";

/// Configuration errors raised before any stage runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bucket reference field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// Identifies the storage bucket and its region endpoint.
///
/// Both fields are non-empty by construction; the struct is immutable for the
/// duration of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketReference {
    name: String,
    region: String,
}

impl BucketReference {
    /// Validate and build a bucket reference from caller-supplied values.
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let region = region.into();
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyField("name"));
        }
        if region.trim().is_empty() {
            return Err(ConfigError::EmptyField("region"));
        }
        Ok(Self { name, region })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Public address of a single object in this bucket.
    ///
    /// The mapping from key to address is a pure function of (bucket, key).
    pub fn object_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.name, self.region, key
        )
    }

    /// Deterministic public address of the published sitemap.
    pub fn sitemap_url(&self) -> String {
        self.object_url(SITEMAP_KEY)
    }

    pub fn trace_loaded(&self) {
        info!(
            bucket = %self.name,
            region = %self.region,
            "Loaded BucketReference"
        );
    }
}
