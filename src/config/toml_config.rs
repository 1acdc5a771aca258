use crate::config::{resolve_base_url, ClientConfig, BASE_URL_ENV, DEFAULT_TIMEOUT};
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub max_request_body_bytes: Option<u64>,
    pub max_response_body_bytes: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ServiceError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment values. Unknown
    /// variables are left in place so validation reports them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Base URL priority: `explicit`, then the file, then the environment,
    /// then the built-in default.
    pub fn into_client_config(self, explicit: Option<&str>) -> Result<ClientConfig> {
        self.into_client_config_with(explicit, |key| std::env::var(key).ok())
    }

    pub fn into_client_config_with<F>(self, explicit: Option<&str>, lookup: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let section = self.client;
        let from_file = section.base_url.filter(|url| !url.trim().is_empty());
        let base_url = match explicit.filter(|url| !url.trim().is_empty()) {
            Some(url) => url.to_string(),
            None => from_file.unwrap_or_else(|| resolve_base_url(None, lookup(BASE_URL_ENV))),
        };

        let config = ClientConfig::new(base_url)
            .with_timeout(
                section
                    .timeout_seconds
                    .map(Duration::from_secs)
                    .unwrap_or(DEFAULT_TIMEOUT),
            )
            .with_max_request_body_bytes(section.max_request_body_bytes)
            .with_max_response_body_bytes(section.max_response_body_bytes);

        config.validate()?;
        Ok(config)
    }
}
