#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_zero_duration, validate_optional_limit, validate_url, Validate,
};
use std::time::Duration;

/// Environment variable consulted when no explicit base URL is given.
pub const BASE_URL_ENV: &str = "GO_IMAGE_SERVICE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Construction-time settings for [`crate::ServiceClient`].
///
/// Body limits default to `None`: rendered images can be large and must
/// never be truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub max_request_body_bytes: Option<u64>,
    pub max_response_body_bytes: Option<u64>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            max_request_body_bytes: None,
            max_response_body_bytes: None,
        }
    }

    /// Resolve the base URL from `explicit`, then the process environment,
    /// then [`DEFAULT_BASE_URL`]. The environment is read once, here.
    pub fn resolve(explicit: Option<&str>) -> Self {
        Self::resolve_with(explicit, |key| std::env::var(key).ok())
    }

    pub fn resolve_with<F>(explicit: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(resolve_base_url(explicit, lookup(BASE_URL_ENV)))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_request_body_bytes(mut self, limit: Option<u64>) -> Self {
        self.max_request_body_bytes = limit;
        self
    }

    pub fn with_max_response_body_bytes(mut self, limit: Option<u64>) -> Self {
        self.max_response_body_bytes = limit;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("client.base_url", &self.base_url)?;
        validate_non_zero_duration("client.timeout", self.timeout)?;
        validate_optional_limit("client.max_request_body_bytes", self.max_request_body_bytes)?;
        validate_optional_limit(
            "client.max_response_body_bytes",
            self.max_response_body_bytes,
        )?;
        Ok(())
    }
}

/// Empty strings count as unset at every level.
pub fn resolve_base_url(explicit: Option<&str>, env_value: Option<String>) -> String {
    explicit
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .or_else(|| env_value.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_argument_wins_over_environment() {
        let url = resolve_base_url(
            Some("http://explicit:9000"),
            Some("http://from-env:7000".to_string()),
        );
        assert_eq!(url, "http://explicit:9000");
    }

    #[test]
    fn environment_wins_over_default() {
        let url = resolve_base_url(None, Some("http://from-env:7000".to_string()));
        assert_eq!(url, "http://from-env:7000");
    }

    #[test]
    fn default_used_when_nothing_set() {
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
    }

    #[test]
    fn empty_values_fall_through() {
        assert_eq!(
            resolve_base_url(Some(""), Some("http://from-env:7000".to_string())),
            "http://from-env:7000"
        );
        assert_eq!(resolve_base_url(Some(""), Some(String::new())), DEFAULT_BASE_URL);
    }

    #[test]
    fn resolve_with_reads_the_documented_variable() {
        let config = ClientConfig::resolve_with(None, |key| {
            (key == BASE_URL_ENV).then(|| "http://images.internal:8080".to_string())
        });
        assert_eq!(config.base_url, "http://images.internal:8080");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_request_body_bytes, None);
        assert_eq!(config.max_response_body_bytes, None);
    }

    #[test]
    fn validation_rejects_bad_settings() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::new("not a url").validate().is_err());
        assert!(ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
        assert!(ClientConfig::default()
            .with_max_response_body_bytes(Some(0))
            .validate()
            .is_err());
    }
}
