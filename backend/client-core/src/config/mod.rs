//! Client configuration.
//!
//! Loaded from `{config_dir}/config.toml`; every section falls back to
//! defaults, so a missing file is a valid setup. The API base URL can be
//! overridden from the environment (or a `.env` file).

use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIRECTORY_NAME: &str = "authform";
const STORAGE_FILE_NAME: &str = "storage.json";

const DEFAULT_API_HOST: &str = "localhost";
const DEFAULT_API_PORT: u16 = 5050;
const DEFAULT_API_BASE_URL: &str =
    const_format::concatcp!("http://", DEFAULT_API_HOST, ":", DEFAULT_API_PORT, "/api");
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "AUTHFORM_API_URL";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_storage_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIRECTORY_NAME).join(STORAGE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(STORAGE_FILE_NAME))
}

// ============================================
// IMPLEMENTATION
// ============================================

impl ClientConfig {
    /// `{platform config dir}/authform`.
    #[track_caller]
    pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIRECTORY_NAME))
            .ok_or_else(|| ConfigError::DirectoryNotFound {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("No platform config directory"),
            })
    }

    /// Load config from {config_dir}/config.toml.
    ///
    /// # Returns
    ///
    /// Returns defaults if the file is missing.
    /// Returns `Err(ConfigError)` if the file exists but is unreadable, corrupted or invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let config = Self::load_from_path(&config_path)?;
        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ClientConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.validate()?;

        Ok(config)
    }

    /// Apply overrides from the process environment, loading `.env` first.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded .env from: {:?}", path);
        }

        self.apply_overrides(|key| env::var(key))
    }

    /// Apply overrides from any variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        match lookup(API_URL_ENV) {
            Ok(base_url) => {
                info!("API base URL overridden by {API_URL_ENV}");
                self.api.base_url = base_url;
            }
            Err(env::VarError::NotPresent) => {}
            Err(env::VarError::NotUnicode(_)) => {
                warn!("Env var {API_URL_ENV} contains invalid unicode");
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("{API_URL_ENV} contains invalid unicode"),
                });
            }
        }

        self.validate()
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = Url::parse(&self.api.base_url).map_err(|e| ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Invalid API base URL '{}': {}", self.api.base_url, e),
        })?;

        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid URL scheme: {}", self.api.base_url),
            });
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("api.timeout_secs must be greater than zero"),
            });
        }

        if self.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("storage.path cannot be empty"),
            });
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Absolute URL of an endpoint under the API base URL.
    ///
    /// Joined textually so a base path (`/api`) is kept.
    pub fn api_url(&self, path: &str) -> Result<String, ConfigError> {
        let url = format!(
            "{}/{}",
            self.api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        Url::parse(&url).map_err(|e| ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Invalid API URL '{}': {}", url, e),
        })?;

        Ok(url)
    }
}
