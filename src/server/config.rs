use std::time::Duration;

use crate::server::{
    error::{config::ConfigError, AppError},
    util::parse::{parse_list, parse_u64},
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub log_level: String,
    pub request_timeout: Duration,
    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with defaults applied
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => parse_u64("REQUEST_TIMEOUT_SECS", &value)?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            request_timeout: Duration::from_secs(request_timeout_secs),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|value| parse_list(&value))
                .unwrap_or_default(),
        })
    }
}
