//! Configuration management for the GrubMart admin console

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Polling configuration for the order views
    #[serde(default)]
    pub polling: PollingConfig,

    /// Menu and add-form configuration
    #[serde(default)]
    pub menu: MenuConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Send cookie credentials with every request
    #[serde(default = "default_send_credentials")]
    pub send_credentials: bool,
}

/// Polling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Refresh interval for the order views, in seconds
    #[serde(default = "default_poll_interval")]
    pub interval_seconds: u64,
}

/// Menu configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Maximum number of words allowed in a product description
    #[serde(default = "default_max_description_words")]
    pub max_description_words: usize,

    /// Display currency prefix
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    std::env::var("GRUBMART_API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

const fn default_request_timeout() -> u64 {
    30
}

const fn default_send_credentials() -> bool {
    true
}

const fn default_poll_interval() -> u64 {
    30
}

const fn default_max_description_words() -> usize {
    6
}

fn default_currency() -> String {
    "KSH".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: default_request_timeout(),
            send_credentials: default_send_credentials(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_poll_interval(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_description_words: default_max_description_words(),
            currency: default_currency(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            polling: PollingConfig::default(),
            menu: MenuConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from an optional `config` file and `GRUBMART_*`
    /// environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("GRUBMART").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(config.api.base_url.starts_with("http"));
        assert_eq!(config.api.request_timeout, 30);
        assert!(config.api.send_credentials);

        assert_eq!(config.polling.interval_seconds, 30);

        assert_eq!(config.menu.max_description_words, 6);
        assert_eq!(config.menu.currency, "KSH");

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.api.base_url, config.api.base_url);
        assert_eq!(
            deserialized.polling.interval_seconds,
            config.polling.interval_seconds
        );
        assert_eq!(
            deserialized.menu.max_description_words,
            config.menu.max_description_words
        );
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json_str = r#"{
            "api": {"base_url": "http://backend.test:9000"},
            "polling": {"interval_seconds": 5}
        }"#;

        let config: Config = serde_json::from_str(json_str).unwrap();

        assert_eq!(config.api.base_url, "http://backend.test:9000");
        assert_eq!(config.api.request_timeout, 30); // Uses default
        assert_eq!(config.polling.interval_seconds, 5);
        assert_eq!(config.menu.max_description_words, 6); // Uses default
    }

    #[test]
    fn test_toml_config_parses() {
        let toml_str = r#"
            [api]
            base_url = "http://127.0.0.1:5000"
            request_timeout = 10

            [menu]
            max_description_words = 8
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.api.request_timeout, 10);
        assert_eq!(config.menu.max_description_words, 8);
        assert_eq!(config.polling.interval_seconds, 30);
    }

    #[test]
    fn test_config_bounds() {
        let config = Config::default();

        assert!(config.api.request_timeout > 0);
        assert!(config.polling.interval_seconds > 0);
        assert!(config.menu.max_description_words > 0);
        assert!(!config.menu.currency.is_empty());
    }
}
