//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Port environment variable.
pub const ENV_PORT: &str = "PORT";
/// Upstream base URL environment variable.
pub const ENV_UPSTREAM_URL: &str = "MELI_API_URL";
/// Log level environment variable.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Setting this enables metrics on the given address.
pub const ENV_METRICS_ADDRESS: &str = "METRICS_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {name}: {reason}")]
    Env { name: &'static str, reason: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read a TOML configuration file without validating it.
pub fn read_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load configuration: TOML file (or defaults), then environment overrides, then validation.
pub fn load_config(path: Option<&Path>) -> Result<ProxyConfig, ConfigError> {
    load_config_with(path, |name| std::env::var(name).ok())
}

/// Same as [`load_config`] but with an explicit environment lookup.
pub fn load_config_with<F>(path: Option<&Path>, lookup: F) -> Result<ProxyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ProxyConfig::default(),
    };
    config.apply_env_overrides(lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

impl ProxyConfig {
    /// Override fields from environment variables. Unset or empty variables are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(port) = var(ENV_PORT) {
            self.listener.port = port.trim().parse().map_err(|e| ConfigError::Env {
                name: ENV_PORT,
                reason: format!("{e}"),
            })?;
        }
        if let Some(url) = var(ENV_UPSTREAM_URL) {
            self.upstream.base_url = url;
        }
        if let Some(level) = var(ENV_LOG_LEVEL) {
            self.observability.log_level = level;
        }
        if let Some(address) = var(ENV_METRICS_ADDRESS) {
            self.observability.metrics_enabled = true;
            self.observability.metrics_address = address;
        }
        Ok(())
    }
}
