use super::{Config, SensorConfig};
use crate::error::AppError;
use crate::sensor::RiotId;
use std::path::Path;

fn validate_url(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::config_error(format!("{field} cannot be empty")));
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{field} must start with http:// or https:// (got '{value}')"
        )));
    }
    Ok(())
}

fn validate_sensor(sensor: &SensorConfig) -> Result<(), AppError> {
    RiotId::parse(&sensor.name)?;

    if sensor.region.trim().is_empty() {
        return Err(AppError::config_error(format!(
            "Region for '{}' cannot be empty",
            sensor.name
        )));
    }
    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - API key cannot be empty
/// - At least one sensor must be configured
/// - Every sensor name must be a `Name#Tag` Riot ID and have a region
///   (the region value itself is not checked against a known list)
/// - Endpoint URLs must use http:// or https://
/// - Timeout and scan interval must be non-zero
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.api_key.trim().is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }

    if config.sensors.is_empty() {
        return Err(AppError::config_error(
            "No sensors configured; add a [[sensors]] entry or pass --player",
        ));
    }
    for sensor in &config.sensors {
        validate_sensor(sensor)?;
    }

    validate_url("account_url", &config.account_url)?;
    validate_url("platform_url", &config.platform_url)?;
    validate_url("ddragon_url", &config.ddragon_url)?;

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "http_timeout_seconds must be greater than zero",
        ));
    }
    if config.scan_interval_seconds == 0 {
        return Err(AppError::config_error(
            "scan_interval_seconds must be greater than zero",
        ));
    }

    if config.fallback_ddragon_version.trim().is_empty() {
        return Err(AppError::config_error(
            "fallback_ddragon_version cannot be empty",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
