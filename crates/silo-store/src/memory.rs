use bytes::Bytes;
use futures_util::stream;

use crate::error::StoreError;
use crate::store::{BlobEntry, BlobStore, ByteChunks};

const DEFAULT_CHUNK: usize = 8 * 1024;

/// In-process [`BlobStore`] over seeded entries.
///
/// The test double for resolver and download logic: keys are listed in
/// insertion order and contents are streamed in fixed-size chunks so
/// multi-chunk code paths are exercised without a network.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<(String, Bytes)>,
    chunk_size: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            chunk_size: DEFAULT_CHUNK,
        }
    }

    /// Seed one object. Builder-style so fixtures read as a listing.
    pub fn with_entry(mut self, key: impl Into<String>, body: impl Into<Bytes>) -> Self {
        self.entries.push((key.into(), body.into()));
        self
    }

    /// Seed a key with an empty body, for listing-only fixtures.
    pub fn with_key(self, key: impl Into<String>) -> Self {
        self.with_entry(key, Bytes::new())
    }

    /// Override the streaming chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

impl BlobStore for MemoryStore {
    async fn list_all(&self, _page_size: i32) -> Result<Vec<BlobEntry>, StoreError> {
        Ok(self
            .entries
            .iter()
            .map(|(key, body)| BlobEntry {
                key: key.clone(),
                size: body.len() as u64,
            })
            .collect())
    }

    async fn open(&self, key: &str) -> Result<(ByteChunks, Option<u64>), StoreError> {
        let body = self
            .entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, body)| body.clone())
            .ok_or_else(|| StoreError::NoSuchKey {
                key: key.to_string(),
            })?;

        let size = body.len() as u64;
        let chunk_size = if self.chunk_size == 0 {
            DEFAULT_CHUNK
        } else {
            self.chunk_size
        };
        let mut chunks = Vec::new();
        let mut rest = body;
        while rest.len() > chunk_size {
            chunks.push(Ok(rest.split_to(chunk_size)));
        }
        if !rest.is_empty() {
            chunks.push(Ok(rest));
        }

        Ok((Box::pin(stream::iter(chunks)), Some(size)))
    }
}
