//! Error types for the blob store gateway.

use thiserror::Error;

use crate::config::ConfigError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not reach provided endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: BoxError,
    },

    #[error("no such key in bucket: {key}")]
    NoSuchKey { key: String },

    #[error("{capability} is not supported by this backend")]
    Unsupported { capability: &'static str },

    #[error("transport error: {0}")]
    Transport(#[source] BoxError),
}

/// Classify a bucket-resolution failure.
///
/// Endpoint misconfiguration is the dominant real cause of this failure,
/// so when an endpoint override was configured the raw transport error is
/// re-wrapped into a message that names the endpoint. The decision hinges
/// only on whether an endpoint was configured, never on the error text.
#[cfg_attr(not(feature = "aws"), allow(dead_code))]
pub(crate) fn classify_bucket_error(source: BoxError, endpoint: Option<&str>) -> StoreError {
    match endpoint {
        Some(endpoint) => StoreError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        },
        None => StoreError::Transport(source),
    }
}
