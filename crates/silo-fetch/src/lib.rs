//! Streaming download of resolved artifacts.
//!
//! [`Downloader`] copies a resolved artifact's byte stream from a
//! [`BlobStore`](silo_store::BlobStore) into a caller-owned sink, with
//! cumulative progress reported through an injected [`ProgressSink`].
//! The sink is always finalized, success or not; retries are a caller
//! concern and never happen here.

mod error;
mod fetch;
mod progress;

pub use error::FetchError;
pub use fetch::Downloader;
pub use progress::{BarSink, NullSink, ProgressSink};
