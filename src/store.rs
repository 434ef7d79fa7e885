//! AWS S3 implementation of the [`ObjectStore`] contract.
//!
//! Credentials come from the ambient chain (environment, profile, etc.) via
//! `aws-config`; this module never manages or validates them beyond mapping
//! a backend rejection to [`StoreError::Credentials`].

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::debug;

use crate::contract::{ObjectPage, ObjectStore, StoreError};

/// Backend maximum page size for key listing.
const MAX_PAGE_SIZE: i32 = 1000;

/// Service error codes that mean the caller's identity was rejected.
const CREDENTIAL_CODES: [&str; 4] = [
    "InvalidAccessKeyId",
    "SignatureDoesNotMatch",
    "AccessDenied",
    "ExpiredToken",
];

/// Real storage client wrapping the AWS SDK.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Build a client against the given region using ambient credentials.
    pub async fn connect(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_owned()))
            .load()
            .await;
        Self {
            client: Client::new(&config),
        }
    }

}

fn classify_sdk_error<E>(err: SdkError<E>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    // Identity failures before a response exists carry no service code: a
    // missing/unresolvable credential chain fails request construction, and
    // a signing failure surfaces as a user-caused dispatch failure.
    match &err {
        SdkError::ConstructionFailure(_) => {
            return StoreError::Credentials(format!("could not resolve caller identity: {err}"));
        }
        SdkError::DispatchFailure(failure) if failure.is_user() => {
            return StoreError::Credentials(format!("could not sign request: {err}"));
        }
        _ => {}
    }

    if let Some(code) = err.code() {
        if CREDENTIAL_CODES.contains(&code) {
            return StoreError::Credentials(format!(
                "{code}: {}",
                err.message().unwrap_or_default()
            ));
        }
    }

    // A 401/403 without a parseable error code is still an identity rejection.
    if let Some(status) = err.raw_response().map(|response| response.status().as_u16()) {
        if status == 401 || status == 403 {
            return StoreError::Credentials(format!("http {status}: {err}"));
        }
    }

    StoreError::Access(err.to_string())
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation: Option<String>,
    ) -> Result<ObjectPage, StoreError> {
        let mut request = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .max_keys(MAX_PAGE_SIZE);
        if !prefix.is_empty() {
            request = request.prefix(prefix);
        }
        if let Some(token) = continuation {
            request = request.continuation_token(token);
        }

        let output = request.send().await.map_err(classify_sdk_error)?;

        let keys = output
            .contents()
            .iter()
            .filter_map(|object| object.key().map(str::to_owned))
            .collect::<Vec<_>>();
        let continuation = output.next_continuation_token().map(str::to_owned);
        debug!(
            bucket,
            keys = keys.len(),
            truncated = continuation.is_some(),
            "ListObjectsV2 page received"
        );

        Ok(ObjectPage { keys, continuation })
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StoreError> {
        let bytes = body.len();
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(classify_sdk_error)?;
        debug!(bucket, key, bytes, "PutObject completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
    use aws_smithy_runtime_api::client::result::ConnectorError;

    use super::*;

    #[test]
    fn code_less_construction_failure_is_a_credentials_error() {
        // An unresolvable ambient credential chain fails before any request
        // is sent, so there is no service error code to inspect.
        let err = SdkError::<ListObjectsV2Error>::construction_failure(
            "no credentials in the provider chain",
        );
        assert!(matches!(
            classify_sdk_error(err),
            StoreError::Credentials(_)
        ));
    }

    #[test]
    fn user_dispatch_failure_is_a_credentials_error() {
        let err = SdkError::<ListObjectsV2Error>::dispatch_failure(ConnectorError::user(
            "request signing failed".into(),
        ));
        assert!(matches!(
            classify_sdk_error(err),
            StoreError::Credentials(_)
        ));
    }

    #[test]
    fn io_dispatch_failure_is_a_generic_access_error() {
        let source = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err =
            SdkError::<ListObjectsV2Error>::dispatch_failure(ConnectorError::io(source.into()));
        assert!(matches!(classify_sdk_error(err), StoreError::Access(_)));
    }

    #[test]
    fn timeout_is_a_generic_access_error() {
        let err = SdkError::<ListObjectsV2Error>::timeout_error("request timed out");
        assert!(matches!(classify_sdk_error(err), StoreError::Access(_)));
    }
}
