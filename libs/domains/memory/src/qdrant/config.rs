use crate::error::{MemoryError, MemoryResult};

/// Qdrant connection configuration
#[derive(Debug, Clone)]
pub struct QdrantConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl QdrantConfig {
    /// Read connection settings from the environment.
    ///
    /// `QDRANT_URL` is required; `QDRANT_API_KEY` is optional so keyless
    /// local deployments keep working. Callers invoke this at first use of
    /// the store, never at startup.
    pub fn from_env() -> MemoryResult<Self> {
        let url = std::env::var("QDRANT_URL")
            .map_err(|_| MemoryError::Config("QDRANT_URL is not set".to_string()))?;

        let api_key = std::env::var("QDRANT_API_KEY").ok();

        let timeout_secs = std::env::var("QDRANT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            url,
            api_key,
            timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_requires_url() {
        temp_env::with_var_unset("QDRANT_URL", || {
            let err = QdrantConfig::from_env().unwrap_err();
            assert!(matches!(err, MemoryError::Config(_)));
            assert!(err.to_string().contains("QDRANT_URL"));
        });
    }

    #[test]
    fn from_env_with_defaults() {
        temp_env::with_vars(
            [
                ("QDRANT_URL", Some("http://localhost:6334")),
                ("QDRANT_API_KEY", None),
                ("QDRANT_TIMEOUT_SECS", None),
            ],
            || {
                let config = QdrantConfig::from_env().unwrap();
                assert_eq!(config.url, "http://localhost:6334");
                assert!(config.api_key.is_none());
                assert_eq!(config.timeout_secs, 30);
            },
        );
    }

    #[test]
    fn from_env_reads_credential_and_timeout() {
        temp_env::with_vars(
            [
                ("QDRANT_URL", Some("https://cluster.qdrant.example")),
                ("QDRANT_API_KEY", Some("secret")),
                ("QDRANT_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = QdrantConfig::from_env().unwrap();
                assert_eq!(config.api_key.as_deref(), Some("secret"));
                assert_eq!(config.timeout_secs, 5);
            },
        );
    }
}
