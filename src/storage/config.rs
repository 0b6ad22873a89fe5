//! TOML Configuration Management
//!
//! Loads the application configuration file, falling back to defaults when
//! no file exists, and applies environment-variable overrides. The CLI may
//! override the base URL on top of whatever is loaded here.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::AppConfig;
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::config_path;

/// Environment variable overriding `api.base_url`.
pub const ENV_BASE_URL: &str = "ARG_LENS_BASE_URL";
/// Environment variable overriding `api.timeout_secs`.
pub const ENV_TIMEOUT_SECS: &str = "ARG_LENS_TIMEOUT_SECS";

/// Configuration service for app settings
#[derive(Debug)]
pub struct ConfigService {
    config_path: PathBuf,
    config: AppConfig,
}

impl ConfigService {
    /// Load from the platform config path, or defaults when absent.
    pub fn new() -> AppResult<Self> {
        Self::from_path(config_path()?)
    }

    /// Load from an explicit path, or defaults when the file is absent.
    pub fn from_path(path: impl Into<PathBuf>) -> AppResult<Self> {
        let config_path = path.into();
        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            AppConfig::default()
        };
        apply_env_overrides(&mut config);
        config.validate().map_err(AppError::config)?;
        Ok(Self {
            config_path,
            config,
        })
    }

    fn load_from_file(path: &Path) -> AppResult<AppConfig> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            AppError::config(format!("{}: {}", path.display(), e))
        })
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// Path the configuration was loaded from
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
        if !base_url.trim().is_empty() {
            config.api.base_url = base_url;
        }
    }
    if let Ok(timeout) = std::env::var(ENV_TIMEOUT_SECS) {
        if let Ok(secs) = timeout.parse::<u64>() {
            config.api.timeout_secs = secs;
        }
    }
}
