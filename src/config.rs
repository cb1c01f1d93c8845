//! Client configuration
//!
//! A [`ClientConfig`] can be built in code or loaded from YAML:
//!
//! ```yaml
//! base_url: https://restapi.ultradns.com/v1
//! timeout_secs: 30
//! headers:
//!   Authorization: Bearer <token>
//! rate_limit:
//!   requests_per_second: 5
//!   burst_size: 5
//! retry:
//!   max_retries: 5
//!   backoff_ms: 5000
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::pagination::RetryPolicy;
use crate::types::StringMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://restapi.ultradns.com/v1";

/// Retry settings as written in a config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    /// Server failures that end a pagination sweep
    pub max_retries: u32,
    /// Fixed delay between attempts, in milliseconds
    pub backoff_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_retries: policy.max_retries,
            backoff_ms: policy.backoff.as_millis() as u64,
        }
    }
}

impl From<&RetrySettings> for RetryPolicy {
    fn from(settings: &RetrySettings) -> Self {
        RetryPolicy::new(settings.max_retries, Duration::from_millis(settings.backoff_ms))
    }
}

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API base URL
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User agent override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Headers sent with every request
    pub headers: StringMap,
    /// Client-side rate limit, `null` to disable
    pub rate_limit: Option<RateLimiterConfig>,
    /// Pagination retry settings
    pub retry: RetrySettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: None,
            headers: StringMap::new(),
            rate_limit: Some(RateLimiterConfig::default()),
            retry: RetrySettings::default(),
        }
    }
}

impl ClientConfig {
    /// Parse a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }

    /// Retry policy for pagination sweeps
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::from(&self.retry)
    }

    /// HTTP client settings
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs));

        builder = match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }

        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.retry_policy(), RetryPolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_str() {
        let config = ClientConfig::from_yaml_str(
            r"
base_url: https://test-restapi.ultradns.com/v1
timeout_secs: 10
headers:
  Authorization: Bearer token
rate_limit: null
retry:
  max_retries: 2
  backoff_ms: 250
",
        )
        .unwrap();

        assert_eq!(config.base_url, "https://test-restapi.ultradns.com/v1");
        assert_eq!(config.rate_limit, None);
        assert_eq!(
            config.retry_policy(),
            RetryPolicy::new(2, Duration::from_millis(250))
        );

        let http = config.http_config();
        assert_eq!(http.timeout, Duration::from_secs(10));
        assert!(http.rate_limit.is_none());
        assert_eq!(
            http.default_headers.get("Authorization"),
            Some(&"Bearer token".to_string())
        );
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = ClientConfig::from_yaml_str("retry:\n  max_retries: 1\n").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.retry.max_retries, 1);
        assert_eq!(config.retry.backoff_ms, 5000);
        assert_eq!(config.rate_limit, Some(RateLimiterConfig::default()));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ClientConfig::from_yaml_str("base_url: not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = ClientConfig::from_yaml_str("timeout_secs: 0").unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://localhost:8080").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_from_missing_file() {
        let err = ClientConfig::from_file("/nonexistent/udns.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_from_file_names_path_on_bad_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: 0").unwrap();

        let err = ClientConfig::from_file(file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with(&format!("Invalid config {}", file.path().display())));
        assert!(message.contains("timeout_secs"));
    }

    #[test]
    fn test_from_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = ClientConfig::from_file(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config"));
    }
}
