#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{FluentApiError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const ENDPOINT_ENV: &str = "FLUENT_API_ENDPOINT";
pub const TOKEN_ENV: &str = "FLUENT_API_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    client: ClientConfig,
}

/// Connection settings for the default HTTP transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: None,
            timeout_seconds: None,
            user_agent: None,
            headers: HashMap::new(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FluentApiError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，`[client]` 區段
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let file: ConfigFile =
            toml::from_str(&processed_content).map_err(|e| FluentApiError::ConfigParseError {
                message: format!("TOML parsing error: {}", e),
            })?;
        Ok(file.client)
    }

    /// 替換環境變數 (例如 ${CONSOLE_TOKEN})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// `FLUENT_API_ENDPOINT` / `FLUENT_API_TOKEN` 覆蓋檔案中的值
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            tracing::debug!("Endpoint overridden by {}", ENDPOINT_ENV);
            self.endpoint = endpoint;
        }
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            self.token = Some(token);
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("client.endpoint", &self.endpoint)?;

        if let Some(token) = &self.token {
            validate_non_empty_string("client.token", token)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validate_range("client.timeout_seconds", timeout, 1, 600)?;
        }

        for name in self.headers.keys() {
            if reqwest::header::HeaderName::from_bytes(name.as_bytes()).is_err() {
                return Err(FluentApiError::InvalidConfigValueError {
                    field: "client.headers".to_string(),
                    value: name.clone(),
                    reason: "Not a valid HTTP header name".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[client]
endpoint = "https://console-api.example.com"
token = "abc"
timeout_seconds = 10

[client.headers]
X-Domain-Id = "domain-1"
"#;

        let config = ClientConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.endpoint, "https://console-api.example.com");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.headers.get("X-Domain-Id").unwrap(), "domain-1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FLUENT_API_TEST_TOKEN", "secret-token");

        let toml_content = r#"
[client]
endpoint = "https://console-api.example.com"
token = "${FLUENT_API_TEST_TOKEN}"
"#;

        let config = ClientConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.token.as_deref(), Some("secret-token"));

        std::env::remove_var("FLUENT_API_TEST_TOKEN");
    }

    #[test]
    fn test_config_validation() {
        let config = ClientConfig::new("invalid-url");
        assert!(config.validate().is_err());

        let config = ClientConfig::new("https://console-api.example.com").with_timeout_seconds(0);
        assert!(config.validate().is_err());

        let config = ClientConfig::new("https://console-api.example.com").with_token("  ");
        assert!(config.validate().is_err());

        let mut config = ClientConfig::new("https://console-api.example.com");
        config.headers.insert("bad header".to_string(), "x".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_timeout() {
        let config = ClientConfig::new("https://console-api.example.com");
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECONDS));
    }

    #[test]
    fn test_missing_client_section_fails() {
        let result = ClientConfig::from_toml_str("endpoint = \"https://x.example.com\"");
        assert!(matches!(result, Err(FluentApiError::ConfigParseError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[client]
endpoint = "http://localhost:8080"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = ClientConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert!(config.token.is_none());
    }
}
