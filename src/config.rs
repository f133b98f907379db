//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! provider defaults, cosmetic sampling bounds, HTTP cache headers, logging
//! format, and default paths. `AppConfig` is the root configuration struct.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Provider Defaults
// =============================================================================

/// Default base URL for the OpenRouter-compatible completion API.
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model identifier sent with every completion request.
pub const DEFAULT_PROVIDER_MODEL: &str = "openai/gpt-3.5-turbo";

/// Default timeout for the outbound provider call, in seconds.
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Default cap on generated tokens, keeping cost and response size bounded.
pub const DEFAULT_PROVIDER_MAX_TOKENS: u32 = 150;

/// Environment variable holding the provider API key.
///
/// The credential is deliberately not part of the TOML file so it never
/// lands in version control or packaged config.
pub const PROVIDER_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

// =============================================================================
// Cosmetic Sampling Bounds
// =============================================================================

/// Inclusive lower bound for the lucky number.
pub const LUCKY_NUMBER_MIN: u8 = 1;

/// Inclusive upper bound for the lucky number.
pub const LUCKY_NUMBER_MAX: u8 = 99;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Horoscope responses are randomized per request and must never be cached.
pub const CACHE_CONTROL_API: &str = "no-store";

/// Static content (landing page, favicon) - long cache with immutable hint
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "stargazer=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Outbound text-completion provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings for the outbound text-completion provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the OpenRouter-compatible API
    #[serde(default = "ProviderConfig::default_base_url")]
    pub base_url: String,
    /// Model identifier sent with completion requests
    #[serde(default = "ProviderConfig::default_model")]
    pub model: String,
    /// Timeout for the outbound call in seconds
    #[serde(default = "ProviderConfig::default_timeout")]
    pub timeout_seconds: u64,
    /// Maximum tokens the provider may generate per request
    #[serde(default = "ProviderConfig::default_max_tokens")]
    pub max_tokens: u32,
    /// Optional HTTP-Referer attribution header required by some providers
    pub referer: Option<String>,
    /// Optional X-Title attribution header required by some providers
    pub app_title: Option<String>,
    /// API key, populated from the environment at load time
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            model: Self::default_model(),
            timeout_seconds: Self::default_timeout(),
            max_tokens: Self::default_max_tokens(),
            referer: None,
            app_title: None,
            api_key: None,
        }
    }
}

impl ProviderConfig {
    fn default_base_url() -> String {
        DEFAULT_PROVIDER_BASE_URL.to_string()
    }

    fn default_model() -> String {
        DEFAULT_PROVIDER_MODEL.to_string()
    }

    fn default_timeout() -> u64 {
        DEFAULT_PROVIDER_TIMEOUT_SECS
    }

    fn default_max_tokens() -> u32 {
        DEFAULT_PROVIDER_MAX_TOKENS
    }

    /// Check if a credential is available for the live provider path.
    pub fn has_credentials(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&contents)?;

        if config.provider.timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "provider.timeout_seconds must be greater than zero".to_string(),
            ));
        }

        // Credential comes from the environment, never from the file
        config.provider.api_key = std::env::var(PROVIDER_API_KEY_ENV).ok();

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_applies_provider_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[http]
host = "127.0.0.1"
port = 5000
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.provider.base_url, DEFAULT_PROVIDER_BASE_URL);
        assert_eq!(config.provider.model, DEFAULT_PROVIDER_MODEL);
        assert_eq!(
            config.provider.timeout_seconds,
            DEFAULT_PROVIDER_TIMEOUT_SECS
        );
        assert_eq!(config.provider.max_tokens, DEFAULT_PROVIDER_MAX_TOKENS);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn load_rejects_zero_timeout() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[http]
host = "127.0.0.1"
port = 5000

[provider]
timeout_seconds = 0
"#
        )
        .unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn load_reads_provider_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[http]
host = "0.0.0.0"
port = 8080

[provider]
base_url = "http://localhost:9999/api/v1"
model = "test/model"
timeout_seconds = 5
max_tokens = 64
referer = "https://stargazer.example"
app_title = "Stargazer"
"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.provider.base_url, "http://localhost:9999/api/v1");
        assert_eq!(config.provider.model, "test/model");
        assert_eq!(config.provider.timeout_seconds, 5);
        assert_eq!(config.provider.max_tokens, 64);
        assert_eq!(
            config.provider.referer.as_deref(),
            Some("https://stargazer.example")
        );
        assert_eq!(config.provider.app_title.as_deref(), Some("Stargazer"));
    }
}
