//! Filesystem Paths
//!
//! Resolves the platform-specific location of the application's
//! configuration file.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Directory name under the platform config dir.
const APP_DIR: &str = "arg-lens";

/// Configuration file name.
const CONFIG_FILE: &str = "config.toml";

/// The application's configuration directory.
pub fn config_dir() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| AppError::config("could not determine platform config directory"))
}

/// Full path of the configuration file.
pub fn config_path() -> AppResult<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}
