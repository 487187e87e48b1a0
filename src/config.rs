//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::{ClientConfig, DEFAULT_API_BASE};
use crate::auth::FileTokenStore;
use crate::pages::TotalSource;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub booking: BookingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Admin token storage
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Token file; defaults to `<data dir>/resort-admin/admin_token`
    pub token_file: Option<PathBuf>,
}

/// Booking page behaviour
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingConfig {
    #[serde(default)]
    pub total_source: TotalSource,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("resort-admin").join("config.toml")),
            Some(PathBuf::from("/etc/resort-admin/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = var("RESORT_ADMIN_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = var("RESORT_ADMIN_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring invalid RESORT_ADMIN_TIMEOUT_SECS: {}", timeout),
            }
        }

        // Auth overrides
        if let Some(path) = var("RESORT_ADMIN_TOKEN_FILE") {
            self.auth.token_file = Some(PathBuf::from(path));
        }

        // Booking overrides
        if let Some(source) = var("RESORT_ADMIN_TOTAL_SOURCE") {
            match source.parse() {
                Ok(total_source) => self.booking.total_source = total_source,
                Err(e) => tracing::warn!("Ignoring RESORT_ADMIN_TOTAL_SOURCE: {}", e),
            }
        }

        // Logging overrides
        if let Some(level) = var("RESORT_ADMIN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("RESORT_ADMIN_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// HTTP client settings for the configured backend
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            timeout_secs: self.api.timeout_secs,
        }
    }

    /// Token store at the configured or default location
    pub fn token_store(&self) -> FileTokenStore {
        let path = self
            .auth
            .token_file
            .clone()
            .unwrap_or_else(FileTokenStore::default_path);
        FileTokenStore::new(path)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Resort Admin Configuration
#
# Environment variables override these settings:
# - RESORT_ADMIN_API_URL
# - RESORT_ADMIN_TIMEOUT_SECS
# - RESORT_ADMIN_TOKEN_FILE
# - RESORT_ADMIN_TOTAL_SOURCE
# - RESORT_ADMIN_LOG_LEVEL
# - RESORT_ADMIN_LOG_FORMAT

[api]
# Backend base URL, including the API prefix
base_url = "http://localhost:8000/api/v1"

# Request timeout in seconds (0 waits indefinitely)
timeout_secs = 30

[auth]
# Where `resort-admin login` stores the admin token
# token_file = "~/.local/share/resort-admin/admin_token"

[booking]
# Source of the submitted total: estimate (client-side) or quote (pricing endpoint)
total_source = "estimate"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
