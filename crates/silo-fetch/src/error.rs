use thiserror::Error;

use silo_store::StoreError;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Opening or streaming from the store failed; the transport error
    /// surfaces verbatim.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed writing to destination: {0}")]
    Io(#[source] std::io::Error),
}
