use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::config::{Config, SensorConfig};
use crate::error::AppError;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// League of Legends rank sensor
///
/// Polls the Riot API for each configured player and publishes the solo
/// queue rank ("GOLD IV" or "Unranked") together with level, LP, wins,
/// losses and win rate.
///
/// By default every sensor is refreshed on the configured scan interval
/// (15 minutes) until interrupted with Ctrl-C. Use --once to poll a single
/// time and print the sensor states as JSON.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Poll every sensor once, print the results as JSON and exit.
    #[arg(short, long)]
    pub once: bool,

    /// Track this Riot ID (Name#Tag) instead of the configured sensors.
    /// Requires --region.
    #[arg(short, long, value_name = "NAME#TAG", requires = "region")]
    pub player: Option<String>,

    /// Platform region for --player, e.g. euw1, na1, kr.
    #[arg(short, long, requires = "player")]
    pub region: Option<String>,

    /// Override the scan interval in seconds.
    #[arg(short, long, value_name = "SECONDS")]
    pub interval: Option<u64>,

    /// Read configuration from this file instead of the default location.
    #[arg(long = "config", help_heading = "Configuration", value_name = "PATH")]
    pub config: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also log to stdout in --once mode.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Merges command line overrides into a loaded configuration.
    pub fn apply_to(&self, config: &mut Config) -> Result<(), AppError> {
        if let Some(player) = &self.player {
            let region = self.region.clone().ok_or_else(|| {
                AppError::config_error("--player requires --region")
            })?;
            config.sensors = vec![SensorConfig {
                name: player.clone(),
                region,
            }];
        }

        if let Some(interval) = self.interval {
            config.scan_interval_seconds = interval;
        }

        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_once_with_player() {
        let args = Args::try_parse_from([
            "lol_rank_sensor",
            "--once",
            "--player",
            "Faker#KR1",
            "--region",
            "kr",
        ])
        .unwrap();

        assert!(args.once);
        assert_eq!(args.player.as_deref(), Some("Faker#KR1"));
        assert_eq!(args.region.as_deref(), Some("kr"));
    }

    #[test]
    fn test_player_requires_region() {
        let result = Args::try_parse_from(["lol_rank_sensor", "--player", "Faker#KR1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_to_replaces_sensors() {
        let mut config = Config {
            sensors: vec![SensorConfig {
                name: "Old#EUW".to_string(),
                region: "euw1".to_string(),
            }],
            ..Config::default()
        };
        let args = Args {
            player: Some("Faker#KR1".to_string()),
            region: Some("kr".to_string()),
            interval: Some(60),
            log_file: Some("/tmp/lol.log".to_string()),
            ..Args::default()
        };

        args.apply_to(&mut config).unwrap();

        assert_eq!(config.sensors.len(), 1);
        assert_eq!(config.sensors[0].name, "Faker#KR1");
        assert_eq!(config.scan_interval_seconds, 60);
        assert_eq!(config.log_file_path.as_deref(), Some("/tmp/lol.log"));
    }

    #[test]
    fn test_apply_to_without_overrides_keeps_config() {
        let mut config = Config::default();
        let before = config.clone();
        Args::default().apply_to(&mut config).unwrap();
        assert_eq!(config, before);
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
