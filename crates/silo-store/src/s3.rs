//! Production adapter over `aws-sdk-s3`.

use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use futures_util::stream;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::{StoreError, classify_bucket_error};
use crate::store::{BlobEntry, BlobStore, ByteChunks};

/// [`BlobStore`] backed by an S3 (or S3-compatible) bucket.
pub struct S3Store {
    client: Client,
    bucket: String,
    endpoint: Option<String>,
}

impl S3Store {
    /// Build a client from static credentials.
    ///
    /// Validation runs first; a missing required field fails here,
    /// before any request is made. Path-style addressing is forced when
    /// an endpoint override is present, which is what S3-compatible
    /// backends expect.
    pub fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        config.validate()?;

        if config.v2_signing {
            warn!("v2 request signing is not supported; requests will be signed with v4");
        }

        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "silo-static",
        );
        let mut builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials);
        if let Some(endpoint) = config.endpoint_url() {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            endpoint: config.endpoint_url(),
        })
    }

    /// Check the bucket resolves before listing or opening anything.
    ///
    /// Failures here are re-classified when an endpoint override is in
    /// play; see [`classify_bucket_error`].
    async fn resolve_bucket(&self) -> Result<(), StoreError> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map(|_| ())
            .map_err(|err| classify_bucket_error(Box::new(err), self.endpoint.as_deref()))
    }
}

impl BlobStore for S3Store {
    async fn list_all(&self, page_size: i32) -> Result<Vec<BlobEntry>, StoreError> {
        self.resolve_bucket().await?;

        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .max_keys(page_size)
            .into_paginator()
            .send();

        let mut entries = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|err| StoreError::Transport(Box::new(err)))?;
            for object in page.contents() {
                if let Some(key) = object.key() {
                    entries.push(BlobEntry {
                        key: key.to_string(),
                        size: object.size().and_then(|n| u64::try_from(n).ok()).unwrap_or(0),
                    });
                }
            }
        }
        debug!(bucket = %self.bucket, count = entries.len(), "listed bucket keys");
        Ok(entries)
    }

    async fn open(&self, key: &str) -> Result<(ByteChunks, Option<u64>), StoreError> {
        self.resolve_bucket().await?;

        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                let missing = err
                    .as_service_error()
                    .map(|service| service.is_no_such_key())
                    .unwrap_or(false);
                if missing {
                    StoreError::NoSuchKey {
                        key: key.to_string(),
                    }
                } else {
                    StoreError::Transport(Box::new(err))
                }
            })?;

        let size = response
            .content_length()
            .and_then(|n| u64::try_from(n).ok());
        let chunks = stream::try_unfold(response.body, |mut body| async move {
            match body.try_next().await {
                Ok(Some(chunk)) => Ok(Some((chunk, body))),
                Ok(None) => Ok(None),
                Err(err) => Err(StoreError::Transport(Box::new(err))),
            }
        });
        Ok((Box::pin(chunks), size))
    }
}
