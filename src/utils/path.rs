//! Path utilities for configuration files
//!
//! Handles XDG directory specifications and path resolution.

use crate::error::{GeoError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Get the geolocator configuration directory
///
/// Priority:
/// 1. GEOLOCATOR_CONFIG_HOME environment variable
/// 2. GEOLOCATOR_HOME environment variable
/// 3. XDG_CONFIG_HOME/geolocator
/// 4. ~/.config/geolocator (fallback)
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(path) = env::var("GEOLOCATOR_CONFIG_HOME") {
        return Ok(expand_tilde(&path));
    }

    if let Ok(path) = env::var("GEOLOCATOR_HOME") {
        return Ok(expand_tilde(&path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("geolocator"));
    }

    Err(GeoError::config("Unable to determine config directory"))
}

/// Get the path to the config file
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.yaml"))
}

/// Ensure directory exists, create if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .map_err(|e| GeoError::config(format!("Failed to create directory: {}", e)))?;
    }
    Ok(())
}

/// Expand tilde (~) in path
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
