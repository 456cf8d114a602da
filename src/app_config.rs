use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use url::Url;

use crate::errors::AppError;

/// Application configuration module
///
/// Loaded from a JSON file (`conf.json` by default). Every field has a
/// default, so a partial file is valid.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Caption endpoint settings
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Resolution settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Caption endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base path of the timed-text endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    // @field: User-Agent header, the endpoint answers inconsistently without a browser one
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    // @field: Accept-Language header
    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    /// Request timeout in seconds, per call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Resolution configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ResolverConfig {
    /// Languages tried, in order, after the caller's hint
    #[serde(default = "default_fallback_languages")]
    pub fallback_languages: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_languages: default_fallback_languages(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_base_url() -> String {
    "https://www.youtube.com/api/timedtext".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string()
}

fn default_accept_language() -> String {
    "en,en-US;q=0.9".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_fallback_languages() -> Vec<String> {
    vec!["en".to_string(), "en-US".to_string(), "en-GB".to_string()]
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader)
            .map_err(|e| AppError::Config(format!("Failed to parse config file {}: {}", path.display(), e)))
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        let config_json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, config_json)?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        let base_url = Url::parse(&self.upstream.base_url)
            .map_err(|e| AppError::Config(format!("Invalid upstream base_url '{}': {}", self.upstream.base_url, e)))?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(AppError::Config(format!(
                "Upstream base_url must be http or https, got '{}'",
                base_url.scheme()
            )));
        }

        if self.upstream.user_agent.trim().is_empty() {
            return Err(AppError::Config("Upstream user_agent must not be empty".to_string()));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(AppError::Config("Upstream timeout_secs must be greater than zero".to_string()));
        }

        if self.resolver.fallback_languages.iter().any(|lang| lang.trim().is_empty()) {
            return Err(AppError::Config("Fallback languages must not be empty strings".to_string()));
        }

        if self.server.port == 0 {
            return Err(AppError::Config("Server port must not be zero".to_string()));
        }

        Ok(())
    }
}
