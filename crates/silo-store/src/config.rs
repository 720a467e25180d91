use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration field: {field}")]
    MissingField { field: &'static str },
}

/// Backend configuration for a bucket-backed artifact store.
///
/// Deserializes from the kebab-case shape callers keep in their config
/// files; loading the file itself is the caller's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct StoreConfig {
    pub bucket: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    /// Custom endpoint override, for S3-compatible backends.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub disable_tls: bool,
    /// Accepted for config-shape compatibility; requests are always
    /// signed with the current signature version.
    #[serde(default)]
    pub v2_signing: bool,
    /// Bucket-internal prefix under which artifact keys live.
    #[serde(default)]
    pub path_prefix: Option<String>,
}

impl StoreConfig {
    /// Check all required fields are present. Runs before any network
    /// call; a failure here aborts client construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("bucket", &self.bucket),
            ("access-key-id", &self.access_key_id),
            ("secret-access-key", &self.secret_access_key),
            ("region", &self.region),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField { field });
            }
        }
        Ok(())
    }

    /// The endpoint override as a full URL, honoring `disable_tls`.
    ///
    /// A bare host is given a scheme; an explicit `https://` endpoint is
    /// downgraded when TLS is disabled.
    pub fn endpoint_url(&self) -> Option<String> {
        let endpoint = self.endpoint.as_deref()?;
        let scheme = if self.disable_tls { "http" } else { "https" };
        if let Some(rest) = endpoint.strip_prefix("https://") {
            if self.disable_tls {
                return Some(format!("http://{rest}"));
            }
            return Some(endpoint.to_string());
        }
        if endpoint.starts_with("http://") {
            return Some(endpoint.to_string());
        }
        Some(format!("{scheme}://{endpoint}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> StoreConfig {
        StoreConfig {
            bucket: "releases".into(),
            access_key_id: "AKIA123".into(),
            secret_access_key: "secret".into(),
            region: "us-east-1".into(),
            ..StoreConfig::default()
        }
    }

    #[test]
    fn complete_config_validates() {
        assert!(full().validate().is_ok());
    }

    #[test]
    fn each_missing_required_field_is_named() {
        let cases: [(&str, fn(&mut StoreConfig)); 4] = [
            ("bucket", |c| c.bucket.clear()),
            ("access-key-id", |c| c.access_key_id.clear()),
            ("secret-access-key", |c| c.secret_access_key.clear()),
            ("region", |c| c.region.clear()),
        ];
        for (field, blank) in cases {
            let mut config = full();
            blank(&mut config);
            match config.validate() {
                Err(ConfigError::MissingField { field: named }) => {
                    assert_eq!(named, field)
                }
                other => panic!("expected missing {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn whitespace_only_field_is_missing() {
        let mut config = full();
        config.region = "   ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn endpoint_url_honors_disable_tls() {
        let mut config = full();
        assert_eq!(config.endpoint_url(), None);

        config.endpoint = Some("minio.internal:9000".into());
        assert_eq!(
            config.endpoint_url().as_deref(),
            Some("https://minio.internal:9000")
        );

        config.disable_tls = true;
        assert_eq!(
            config.endpoint_url().as_deref(),
            Some("http://minio.internal:9000")
        );

        config.endpoint = Some("https://minio.internal:9000".into());
        assert_eq!(
            config.endpoint_url().as_deref(),
            Some("http://minio.internal:9000")
        );
    }

    #[test]
    fn deserializes_kebab_case() {
        let config: StoreConfig = serde_json::from_str(
            r#"{
                "bucket": "releases",
                "access-key-id": "AKIA123",
                "secret-access-key": "secret",
                "region": "eu-west-1",
                "disable-tls": true,
                "path-prefix": "rel"
            }"#,
        )
        .unwrap();
        assert_eq!(config.region, "eu-west-1");
        assert!(config.disable_tls);
        assert_eq!(config.path_prefix.as_deref(), Some("rel"));
    }
}
