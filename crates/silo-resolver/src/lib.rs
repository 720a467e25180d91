//! Locating versioned artifacts inside a flat bucket namespace.
//!
//! Buckets store artifacts under one naming convention:
//!
//! ```text
//! <prefix>/[<slug>,<version>]<arbitrary-suffix>
//! ```
//!
//! where the prefix segment is optional and tolerant of a leading slash.
//! [`Naming`] turns that convention into anchored patterns, and
//! [`ArtifactResolver`] drives them over a full bucket listing to answer
//! two questions: which versions exist for a product, and which single
//! file matches a (slug, version, glob) triple.
//!
//! Resolution either yields exactly one key or fails; an ambiguous glob
//! is an error that enumerates every candidate rather than a silent pick.

mod error;
mod naming;
mod resolver;
mod version;

pub use error::ResolveError;
pub use naming::{ArtifactMatcher, Naming, VersionMatcher};
pub use resolver::{ArtifactResolver, ResolvedArtifact};
pub use version::Version;
