//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ambient::{AmbientError, AmbientTheme};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub ambient: AmbientTheme,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Local storage key holding the bearer token
    #[serde(default = "default_token_storage_key")]
    pub token_storage_key: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "/api".to_string()
}

fn default_token_storage_key() -> String {
    "auth_token".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_storage_key: default_token_storage_key(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
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
            file: None,
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

        Self::parse(&content, path)
    }

    /// Parse and validate config text; `path` is only used in errors
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.ambient.validate().map_err(|e| ConfigError::Theme {
            path: path.to_path_buf(),
            source: e,
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
            dirs::config_dir().map(|p| p.join("clutch").join("config.toml")),
            Some(PathBuf::from("/etc/clutch/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup, so callers and tests need not
    /// touch the process environment
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("CLUTCH_API_URL") {
            self.api.base_url = url;
        }
        if let Some(key) = lookup("CLUTCH_TOKEN_KEY") {
            self.api.token_storage_key = key;
        }
        if let Some(timeout) = lookup("CLUTCH_API_TIMEOUT") {
            match timeout.parse() {
                Ok(secs) => self.api.request_timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring CLUTCH_API_TIMEOUT={:?}", timeout),
            }
        }

        if let Some(level) = lookup("CLUTCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CLUTCH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid ambient theme in {path:?}: {source}")]
    Theme {
        path: PathBuf,
        #[source]
        source: AmbientError,
    },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Clutch Configuration
#
# Environment variables override these settings:
# - CLUTCH_API_URL
# - CLUTCH_TOKEN_KEY
# - CLUTCH_API_TIMEOUT
# - CLUTCH_LOG_LEVEL
# - CLUTCH_LOG_FORMAT

[api]
# Base URL of the backend REST API
base_url = "/api"

# Local storage key holding the bearer token
token_storage_key = "auth_token"

# Request timeout in seconds
request_timeout_secs = 30

[ambient]
# Upper bound on the particle pool
max_particles = 100

# Viewport width per particle (pixels)
pixels_per_particle = 20.0

# Particle colours, picked uniformly at spawn
palette = [
    "rgba(168, 85, 247, 0.4)",
    "rgba(139, 92, 246, 0.3)",
    "rgba(79, 70, 229, 0.3)",
    "rgba(191, 219, 254, 0.2)",
]

[ambient.highlight]
# Glow under the pointer
radius = 60.0
color = "rgba(139, 92, 246, 0.2)"

# Wave bands, back to front
[[ambient.waves]]
baseline_ratio = 0.85
drift = 20.0
phase_offset = 0.0
amplitude = 15.0
wavelength = 120.0
color = "rgba(76, 29, 149, 0.1)"

[[ambient.waves]]
baseline_ratio = 0.8
drift = 25.0
phase_offset = 1.0
amplitude = 20.0
wavelength = 100.0
color = "rgba(109, 40, 217, 0.07)"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/clutch/clutch.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.api.token_storage_key, "auth_token");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.ambient, AmbientTheme::default());
    }

    #[test]
    fn test_generated_config_matches_defaults() {
        let config = Config::parse(&generate_default_config(), Path::new("default.toml")).unwrap();

        assert_eq!(config.api.base_url, ApiConfig::default().base_url);
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.ambient, AmbientTheme::default());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://clutch.example/api\"\n\n[ambient]\nmax_particles = 40"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.api.base_url, "https://clutch.example/api");
        assert_eq!(config.api.token_storage_key, "auth_token");
        assert_eq!(config.ambient.max_particles, 40);
        assert_eq!(config.ambient.pixels_per_particle, 20.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(Config::load(&path), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_parse_error_names_path() {
        let err = Config::parse("[api\nbase_url = 1", Path::new("broken.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_invalid_theme_is_rejected() {
        let err = Config::parse(
            "[ambient]\npixels_per_particle = 0.0",
            Path::new("theme.toml"),
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Theme { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CLUTCH_API_URL", "http://localhost:5000/api"),
            ("CLUTCH_TOKEN_KEY", "token"),
            ("CLUTCH_API_TIMEOUT", "soon"),
            ("CLUTCH_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.api.token_storage_key, "token");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_endpoint_joining() {
        let api = ApiConfig {
            base_url: "http://localhost:5000/api/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.endpoint("/user/metrics"), "http://localhost:5000/api/user/metrics");
        assert_eq!(ApiConfig::default().endpoint("help/categories"), "/api/help/categories");
    }
}
