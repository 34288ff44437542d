// Configuration loading and parsing (config/app.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// app.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the whole app.toml file.
#[derive(Debug, Clone, Deserialize, Default)]
struct AppFile {
    #[serde(default)]
    service: ServiceSection,
    #[serde(default)]
    defaults: DefaultsSection,
}

#[derive(Debug, Clone, Deserialize)]
struct ServiceSection {
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct DefaultsSection {
    #[serde(default = "default_range_percent")]
    villain_range_percent: u8,
}

fn default_base_url() -> String {
    // The backend's development address; override in config/app.toml.
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_range_percent() -> u8 {
    15
}

impl Default for ServiceSection {
    fn default() -> Self {
        ServiceSection {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for DefaultsSection {
    fn default() -> Self {
        DefaultsSection {
            villain_range_percent: default_range_percent(),
        }
    }
}

// ---------------------------------------------------------------------------
// Assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the equity calculation service (no trailing slash needed).
    pub base_url: String,
    /// Per-request timeout for the outbound equity call.
    pub timeout_secs: u64,
    /// Initial villain range percentile shown at startup.
    pub default_range_percent: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            default_range_percent: default_range_percent(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/app.toml` under `base_dir`.
///
/// A missing file is not an error: built-in defaults apply. A file that
/// exists but does not parse or validate is an error.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("app.toml");

    let file: AppFile = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?
    } else {
        AppFile::default()
    };

    let config = Config {
        base_url: file.service.base_url,
        timeout_secs: file.service.timeout_secs,
        default_range_percent: file.defaults.villain_range_percent,
    };

    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        source: e,
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "service.base_url".into(),
            message: "must not be empty".into(),
        });
    }

    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError {
            field: "service.base_url".into(),
            message: format!("must start with http:// or https://, got `{}`", config.base_url),
        });
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "service.timeout_secs".into(),
            message: "must be greater than 0".into(),
        });
    }

    // Rejected rather than silently clamped: a config value outside the
    // percentile interval is a mistake worth surfacing at startup.
    if !(1..=100).contains(&config.default_range_percent) {
        return Err(ConfigError::ValidationError {
            field: "defaults.villain_range_percent".into(),
            message: format!(
                "must be between 1 and 100 inclusive, got {}",
                config.default_range_percent
            ),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
