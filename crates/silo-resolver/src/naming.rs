use regex::Regex;

use crate::version::Version;

/// The bucket naming convention, bound to one path prefix.
///
/// Keys look like `<prefix>/[<slug>,<version>]<suffix>`. The prefix is
/// optional and may carry a leading slash; both the prefix and the slug
/// are treated as literal text, so regex metacharacters in them never
/// gain meaning.
#[derive(Debug, Clone, Default)]
pub struct Naming {
    prefix: String,
}

impl Naming {
    pub fn new(path_prefix: impl AsRef<str>) -> Self {
        Self {
            prefix: path_prefix.as_ref().trim_matches('/').to_string(),
        }
    }

    /// Listing mode: the version is a lazy capture.
    pub fn version_matcher(&self, slug: &str) -> VersionMatcher {
        VersionMatcher(self.anchored(slug, "(.*?)"))
    }

    /// Lookup mode: the version is matched literally.
    pub fn artifact_matcher(&self, slug: &str, version: &str) -> ArtifactMatcher {
        ArtifactMatcher(self.anchored(slug, &regex::escape(version)))
    }

    fn anchored(&self, slug: &str, version_pattern: &str) -> Regex {
        let pattern = format!(
            r"^/?{}/?\[{},{}\]",
            regex::escape(&self.prefix),
            regex::escape(slug),
            version_pattern,
        );
        // Built entirely from escaped literals and a fixed template.
        Regex::new(&pattern).expect("naming pattern must compile")
    }
}

/// Extracts version tokens from keys of one product.
#[derive(Debug)]
pub struct VersionMatcher(Regex);

impl VersionMatcher {
    /// The version embedded in `key`, or `None` when the key does not
    /// belong to this product. A non-match is not an error; the key is
    /// simply not an artifact of this product.
    pub fn version_of(&self, key: &str) -> Option<Version> {
        self.0
            .captures(key)
            .and_then(|caps| caps.get(1))
            .map(|m| Version::new(m.as_str()))
    }
}

/// Recognizes keys carrying one exact `[slug,version]` tag.
#[derive(Debug)]
pub struct ArtifactMatcher(Regex);

impl ArtifactMatcher {
    pub fn matches(&self, key: &str) -> bool {
        self.0.is_match(key)
    }
}
