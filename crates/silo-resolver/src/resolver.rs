use std::collections::HashSet;

use glob::Pattern;
use tracing::debug;

use silo_store::BlobStore;

use crate::error::ResolveError;
use crate::naming::Naming;
use crate::version::Version;

const DEFAULT_PAGE_SIZE: i32 = 100;

/// A successfully resolved artifact: the single bucket key that matched.
///
/// Short-lived; it exists only to be handed to the downloader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    key: String,
}

impl ResolvedArtifact {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Answers version and file queries over one bucket's listing.
pub struct ArtifactResolver<S: BlobStore> {
    store: S,
    naming: Naming,
    page_size: i32,
}

impl<S: BlobStore> ArtifactResolver<S> {
    pub fn new(store: S, naming: Naming) -> Self {
        Self {
            store,
            naming,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Every distinct version published for `slug`, in the order the
    /// bucket listing first mentions them.
    pub async fn list_versions(&self, slug: &str) -> Result<Vec<Version>, ResolveError> {
        let keys = self.list_keys().await?;
        let matcher = self.naming.version_matcher(slug);

        let mut seen = HashSet::new();
        let mut versions = Vec::new();
        for key in &keys {
            if let Some(version) = matcher.version_of(key) {
                if seen.insert(version.clone()) {
                    versions.push(version);
                }
            }
        }

        if versions.is_empty() {
            return Err(ResolveError::NoVersionsForSlug {
                slug: slug.to_string(),
            });
        }
        debug!(slug, count = versions.len(), "listed product versions");
        Ok(versions)
    }

    /// The single key carrying the exact `[slug,version]` tag whose base
    /// filename matches `file_glob`.
    ///
    /// Two filter stages: the exact-version tag narrows the listing to
    /// one product version, then the glob disambiguates among its
    /// variants. Zero or multiple survivors are both errors; resolution
    /// never silently picks one of several matches.
    pub async fn resolve(
        &self,
        slug: &str,
        version: &str,
        file_glob: &str,
    ) -> Result<ResolvedArtifact, ResolveError> {
        let keys = self.list_keys().await?;
        let matcher = self.naming.artifact_matcher(slug, version);

        let prefixed: Vec<&String> = keys.iter().filter(|key| matcher.matches(key)).collect();
        if prefixed.is_empty() {
            return Err(ResolveError::NoPrefixMatch {
                slug: slug.to_string(),
                version: version.to_string(),
            });
        }

        let pattern = Pattern::new(file_glob).map_err(|source| ResolveError::BadGlob {
            glob: file_glob.to_string(),
            source,
        })?;
        let matched: Vec<String> = prefixed
            .into_iter()
            .filter(|key| pattern.matches(base_name(key)))
            .cloned()
            .collect();

        match matched.len() {
            0 => Err(ResolveError::GlobMatchesNone {
                glob: file_glob.to_string(),
            }),
            1 => {
                let key = matched.into_iter().next().unwrap_or_default();
                debug!(slug, version, %key, "resolved artifact");
                Ok(ResolvedArtifact { key })
            }
            _ => Err(ResolveError::GlobAmbiguous {
                glob: file_glob.to_string(),
                matches: matched,
            }),
        }
    }

    async fn list_keys(&self) -> Result<Vec<String>, ResolveError> {
        let entries = self.store.list_all(self.page_size).await?;
        if entries.is_empty() {
            return Err(ResolveError::EmptyBucket);
        }
        Ok(entries.into_iter().map(|entry| entry.key).collect())
    }
}

/// Last path segment of a key; globs match against this, never the
/// full path.
fn base_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_takes_last_segment() {
        assert_eq!(base_name("rel/[db,1.2.0]linux.tgz"), "[db,1.2.0]linux.tgz");
        assert_eq!(base_name("[db,1.2.0]linux.tgz"), "[db,1.2.0]linux.tgz");
        assert_eq!(base_name("a/b/c"), "c");
    }
}
