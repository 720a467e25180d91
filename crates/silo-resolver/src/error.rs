//! Failure taxonomy for artifact resolution.

use thiserror::Error;

use silo_store::StoreError;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("bucket contains no files")]
    EmptyBucket,

    #[error("no files matching product slug '{slug}' found")]
    NoVersionsForSlug { slug: String },

    #[error(
        "no artifact files with expected prefix [{slug},{version}] found; \
         ensure the artifact you are trying to retrieve was previously \
         persisted to this bucket by an upstream download step"
    )]
    NoPrefixMatch { slug: String, version: String },

    #[error("the glob '{glob}' matches no file")]
    GlobMatchesNone { glob: String },

    #[error(
        "the glob '{glob}' matches multiple files; write your glob to match \
         exactly one of the following:\n  {files}",
        glob = .glob,
        files = .matches.join("\n  ")
    )]
    GlobAmbiguous { glob: String, matches: Vec<String> },

    #[error("invalid glob '{glob}': {source}")]
    BadGlob {
        glob: String,
        #[source]
        source: glob::PatternError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}
