//! Read-only gateway over an object-storage bucket.
//!
//! This crate is the boundary between silo's resolution logic and the
//! storage backend that actually holds artifact files. It exposes:
//!
//! - [`BlobStore`] - the capability trait (full key listing, byte-stream
//!   open) the resolver and downloader are written against
//! - [`S3Store`] - the production adapter over `aws-sdk-s3`
//! - [`MemoryStore`] - a seeded in-process store for tests
//! - [`StoreConfig`] - backend configuration with fail-fast validation
//!
//! Every operation is read-only; nothing in this crate can mutate bucket
//! contents.

mod config;
mod error;
mod memory;
mod store;

#[cfg(feature = "aws")]
mod s3;

pub use config::{ConfigError, StoreConfig};
pub use error::{BoxError, StoreError};
pub use memory::MemoryStore;
pub use store::{BlobEntry, BlobStore, BoxStream, ByteChunks};

#[cfg(feature = "aws")]
pub use s3::S3Store;
