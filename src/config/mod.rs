//! Configuration module for geolocator
//!
//! Handles loading and managing configuration from YAML files and environment variables.

use crate::error::{GeoError, Result};
use crate::utils::path;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Base endpoint of the ip-api.com JSON service
pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json/";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Geolocation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base endpoint; the target is appended as one path segment
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional proxy URL (http, https or socks5)
    #[serde(default = "default_proxy", skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub enable_colors: bool,

    /// Output in JSON format
    #[serde(default)]
    pub json: bool,
}

/// Global configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Verbose logging
    #[serde(default)]
    pub verbose: bool,

    /// File the configuration was loaded from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

// Default value functions
fn default_endpoint() -> String {
    env::var("GEOLOCATOR_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
}

fn default_timeout_secs() -> u64 {
    env::var("GEOLOCATOR_TIMEOUT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

fn default_proxy() -> Option<String> {
    env::var("GEOLOCATOR_PROXY").ok()
}

fn default_true() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            proxy: default_proxy(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            enable_colors: true,
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default config file and environment variables
    pub fn load() -> Result<Self> {
        let config_file = path::config_file()?;
        Self::load_from(&config_file)
    }

    /// Load configuration from `config_file`, falling back to defaults if it does not exist
    pub fn load_from(config_file: &Path) -> Result<Self> {
        let mut config = if config_file.exists() {
            let content = fs::read_to_string(config_file)
                .map_err(|e| GeoError::config(format!("Failed to read config file: {}", e)))?;

            let mut config: Self = serde_yaml::from_str(&content)
                .map_err(|e| GeoError::YamlError(format!("Failed to parse config file: {}", e)))?;
            config.global.config_path = Some(config_file.to_path_buf());
            config
        } else {
            log::debug!("No config file at {:?}, using defaults", config_file);
            Self::default()
        };

        // Override with environment variables
        config.apply_env();

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env(&mut self) {
        if let Ok(val) = env::var("GEOLOCATOR_ENDPOINT") {
            self.service.endpoint = val;
        }
        if let Ok(val) = env::var("GEOLOCATOR_TIMEOUT") {
            match val.parse() {
                Ok(secs) => self.service.timeout_secs = secs,
                Err(_) => log::warn!("Ignoring invalid GEOLOCATOR_TIMEOUT value: {}", val),
            }
        }
        if let Ok(val) = env::var("GEOLOCATOR_PROXY") {
            self.service.proxy = Some(val);
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            path::ensure_dir(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| GeoError::YamlError(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, yaml)
            .map_err(|e| GeoError::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
