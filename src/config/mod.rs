use crate::constants::{self, endpoints, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// One tracked player.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SensorConfig {
    /// Riot ID in `GameName#TagLine` form
    pub name: String,
    /// Platform routing value such as `euw1`, `na1` or `kr`
    pub region: String,
}

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Riot developer API key, sent as `X-Riot-Token`
    pub api_key: String,
    /// Timeout in seconds for required Riot API requests. Defaults to 10.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Seconds between polling cycles. Defaults to 900 (15 minutes).
    #[serde(default = "default_scan_interval")]
    pub scan_interval_seconds: u64,
    /// Data Dragon version used until a fresh one is fetched
    #[serde(default = "default_ddragon_version")]
    pub fallback_ddragon_version: String,
    /// Regional routing host for account lookups
    #[serde(default = "default_account_url")]
    pub account_url: String,
    /// Platform host template, `{region}` is replaced per sensor
    #[serde(default = "default_platform_url")]
    pub platform_url: String,
    /// Data Dragon host for versions and profile icons
    #[serde(default = "default_ddragon_url")]
    pub ddragon_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Players to poll
    #[serde(default)]
    pub sensors: Vec<SensorConfig>,
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_scan_interval() -> u64 {
    constants::DEFAULT_SCAN_INTERVAL_SECONDS
}

fn default_ddragon_version() -> String {
    constants::FALLBACK_DDRAGON_VERSION.to_string()
}

fn default_account_url() -> String {
    endpoints::ACCOUNT_URL.to_string()
}

fn default_platform_url() -> String {
    endpoints::PLATFORM_URL.to_string()
}

fn default_ddragon_url() -> String {
    endpoints::DDRAGON_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            http_timeout_seconds: default_http_timeout(),
            scan_interval_seconds: default_scan_interval(),
            fallback_ddragon_version: default_ddragon_version(),
            account_url: default_account_url(),
            platform_url: default_platform_url(),
            ddragon_url: default_ddragon_url(),
            log_file_path: None,
            sensors: Vec::new(),
        }
    }
}

/// Hides all but the edges of an API key for display.
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 10 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}****{tail}")
}

impl Config {
    /// Loads configuration from `path` or the default config file location.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `LOL_API_KEY` - Override API key (also enough to run without a file)
    /// - `LOL_LOG_FILE` - Override log file path
    /// - `LOL_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 10)
    ///
    /// # Notes
    /// - The result is not validated here: command line sensors may still be
    ///   merged in. Call [`Config::validate`] before use.
    pub async fn load(path: Option<&str>) -> Result<Self, AppError> {
        let config_path = path.map(str::to_string).unwrap_or_else(get_config_path);

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else if std::env::var(env_vars::API_KEY).is_ok() {
            Config::default()
        } else {
            return Err(AppError::config_error(format!(
                "No configuration file found at {config_path}; create one or set {}",
                env_vars::API_KEY
            )));
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Time between polling cycles
    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval_seconds)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The API key is masked; environment overrides are applied so the output
    /// matches what a run would use.
    pub async fn display(path: Option<&str>) -> Result<(), AppError> {
        let config_path = path.map(str::to_string).unwrap_or_else(get_config_path);
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            return Ok(());
        }

        let config = Config::load(Some(&config_path)).await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("API Key:");
        println!("{}", mask_api_key(&config.api_key));
        println!("────────────────────────────────────");
        println!("Sensors:");
        if config.sensors.is_empty() {
            println!("(none)");
        }
        for sensor in &config.sensors {
            println!("{} ({})", sensor.name, sensor.region);
        }
        println!("────────────────────────────────────");
        println!("Scan Interval / HTTP Timeout:");
        println!(
            "{} seconds / {} seconds",
            config.scan_interval_seconds, config.http_timeout_seconds
        );
        println!("────────────────────────────────────");
        println!("Endpoints:");
        println!("{}", config.account_url);
        println!("{}", config.platform_url);
        println!("{}", config.ddragon_url);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/lol_rank_sensor.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a specific path, creating parent directories.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a specific path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
