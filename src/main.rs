// src/main.rs
use clap::Parser;
use lol_rank_sensor::cli::Args;
use lol_rank_sensor::config::Config;
use lol_rank_sensor::error::AppError;
use lol_rank_sensor::logging::setup_logging;
use lol_rank_sensor::runner;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        return Config::display(args.config.as_deref()).await;
    }

    let mut config = Config::load(args.config.as_deref()).await?;
    args.apply_to(&mut config)?;
    config.validate()?;

    // Keep the guard alive until exit so buffered log lines are flushed
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let mut pollers = runner::build_pollers(&config)?;

    if args.once {
        let snapshots = runner::run_once(&mut pollers).await;
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
        return Ok(());
    }

    runner::run_forever(pollers, config.scan_interval()).await
}
