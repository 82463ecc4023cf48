use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::{config::ConfigError, AppError};

/// Parses a u64 value read from an environment variable
///
/// # Arguments
/// - `name` - Name of the variable, used in the error
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed value
/// - `Err(ConfigError::InvalidEnvVar)` - Failed to parse the string as a u64
pub fn parse_u64(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Splits a comma separated list, dropping blank entries
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Unwraps a JSON request body, turning any rejection into a 400 Bad Request
///
/// Axum answers deserialization failures with 422 by default; this API reports every
/// malformed body as 400.
pub fn parse_json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}
