//! # Client Configuration
//!
//! Configuration management for pptgen-client library and CLI.
//! Supports environment variables, config files, and command-line overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Client configuration for the generation API and CLI behavior
///
/// # Examples
///
/// ```rust
/// use pptgen_client::config::ClientConfig;
///
/// // Default configuration
/// let config = ClientConfig::default();
/// assert_eq!(config.api.base_url, "http://localhost:5000/api");
/// assert_eq!(config.cli.poll_interval_ms, 2000);
/// ```
///
/// ```rust,no_run
/// use pptgen_client::config::ClientConfig;
///
/// // Load configuration from environment and config files
/// let config = ClientConfig::load().expect("Failed to load config");
/// println!("Generation API URL: {}", config.api.base_url);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Generation API configuration
    pub api: ApiEndpointConfig,
    /// CLI-specific settings
    pub cli: CliConfig,
}

/// API endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEndpointConfig {
    /// Base URL for the generation API (e.g., "<http://localhost:5000/api>")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

/// CLI-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Interval between result polls in wait mode, in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiEndpointConfig {
                base_url: "http://localhost:5000/api".to_string(),
                timeout_ms: 30000,
            },
            cli: CliConfig {
                poll_interval_ms: 2000,
            },
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file (~/.pptgen/config.toml)
    /// 3. Default values
    pub fn load() -> ClientResult<Self> {
        let mut config = Self::default();

        // Try to load from config file
        if let Some(config_path) = Self::find_config_file() {
            debug!("Loading config from: {}", config_path.display());
            match Self::load_from_file(&config_path) {
                Ok(file_config) => config = file_config,
                Err(e) => {
                    debug!("Failed to load config file: {}", e);
                    // Continue with defaults if config file fails
                }
            }
        }

        // Override with environment variables
        config.apply_env_overrides();

        debug!("Loaded client configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ClientError::config_error(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let possible_paths = [
            // Current directory
            Path::new("./pptgen-client.toml"),
            Path::new("./config/pptgen-client.toml"),
            // User home directory
            &dirs::home_dir()?.join(".pptgen").join("config.toml"),
            &dirs::config_dir()?.join("pptgen").join("config.toml"),
        ];

        for path in &possible_paths {
            if path.exists() && path.is_file() {
                return Some(path.to_path_buf());
            }
        }

        None
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("PPTGEN_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("PPTGEN_API_TIMEOUT_MS") {
            if let Ok(timeout_ms) = timeout.parse() {
                self.api.timeout_ms = timeout_ms;
            }
        }
        if let Ok(interval) = std::env::var("PPTGEN_POLL_INTERVAL_MS") {
            if let Ok(poll_interval_ms) = interval.parse() {
                self.cli.poll_interval_ms = poll_interval_ms;
            }
        }
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> ClientResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::config_error(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ClientError::config_error(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            ClientError::config_error(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get default config file path
    pub fn default_config_path() -> ClientResult<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| ClientError::config_error("Could not determine home directory"))?;

        Ok(home_dir.join(".pptgen").join("config.toml"))
    }
}
