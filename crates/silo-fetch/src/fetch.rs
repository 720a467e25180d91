use futures_util::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::info;

use silo_resolver::ResolvedArtifact;
use silo_store::{BlobStore, ByteChunks, StoreError};

use crate::error::FetchError;
use crate::progress::ProgressSink;

/// Copies resolved artifacts out of a blob store.
pub struct Downloader<S: BlobStore> {
    store: S,
}

impl<S: BlobStore> Downloader<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stream one artifact into `destination`.
    ///
    /// The destination is caller-owned; this only writes into it and
    /// flushes. The progress sink sees `begin` with the best-effort
    /// total, one `advance` per chunk, and `finish` regardless of how
    /// the copy ends.
    pub async fn download<W, P>(
        &self,
        artifact: &ResolvedArtifact,
        destination: &mut W,
        progress: &mut P,
    ) -> Result<(), FetchError>
    where
        W: AsyncWrite + Unpin + Send,
        P: ProgressSink + Send,
    {
        let (chunks, size) = self.store.open(artifact.key()).await?;

        info!(artifact = artifact.key(), size, "starting download from blob store");
        progress.begin(size);
        let outcome = copy_chunks(chunks, destination, progress).await;
        progress.finish();
        outcome
    }

    /// Stemcell retrieval is a capability this backend knowingly lacks.
    pub async fn download_stemcell<W>(
        &self,
        _artifact: &ResolvedArtifact,
        _destination: &mut W,
    ) -> Result<(), FetchError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        Err(StoreError::Unsupported {
            capability: "stemcell download",
        }
        .into())
    }
}

async fn copy_chunks<W, P>(
    mut chunks: ByteChunks,
    destination: &mut W,
    progress: &mut P,
) -> Result<(), FetchError>
where
    W: AsyncWrite + Unpin + Send,
    P: ProgressSink + Send,
{
    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        destination
            .write_all(&chunk)
            .await
            .map_err(FetchError::Io)?;
        progress.advance(chunk.len() as u64);
    }
    destination.flush().await.map_err(FetchError::Io)?;
    Ok(())
}
