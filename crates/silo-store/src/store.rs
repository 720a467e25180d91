use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

use crate::error::StoreError;

/// A boxed stream type for blob contents.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// The byte stream handed out by [`BlobStore::open`].
pub type ByteChunks = BoxStream<'static, Result<Bytes, StoreError>>;

/// One listed object: its full key and its size in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobEntry {
    pub key: String,
    pub size: u64,
}

/// Read-only capability over one bucket.
///
/// This is the seam between resolution logic and real storage: the
/// resolver and downloader take any `BlobStore`, so tests run against
/// [`MemoryStore`](crate::MemoryStore) while production uses
/// [`S3Store`](crate::S3Store).
///
/// Implementations never mutate bucket contents, and each call stands
/// alone; no session state is required between a listing and a
/// subsequent open.
pub trait BlobStore: Send + Sync {
    /// List every key in the bucket, paging through the backend with
    /// the given page size.
    fn list_all(
        &self,
        page_size: i32,
    ) -> impl Future<Output = Result<Vec<BlobEntry>, StoreError>> + Send;

    /// Open a byte stream for one key.
    ///
    /// The returned size is best-effort; backends that cannot report a
    /// length up front return `None`.
    fn open(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<(ByteChunks, Option<u64>), StoreError>> + Send;
}
