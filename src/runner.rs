//! Minimal stand-in for the host platform's scheduler.
//!
//! Each poller is owned by exactly one task, so an entity's cycles are
//! serialized while different players are polled concurrently.

use futures::future::join_all;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::riot_api::{RiotClient, create_http_client};
use crate::sensor::{CycleStage, RankPoller, SensorSnapshot};

/// Builds one poller per configured sensor, all sharing one HTTP client.
///
/// Fails on the first sensor whose name is not a valid Riot ID.
pub fn build_pollers(config: &Config) -> Result<Vec<RankPoller>, AppError> {
    let http = create_http_client()?;
    let client = RiotClient::from_config(http, config);

    config
        .sensors
        .iter()
        .map(|sensor| {
            RankPoller::from_config(client.clone(), sensor, &config.fallback_ddragon_version)
        })
        .collect()
}

/// Runs a single cycle on every poller concurrently and returns the snapshots
/// in configuration order.
pub async fn run_once(pollers: &mut [RankPoller]) -> Vec<SensorSnapshot> {
    join_all(pollers.iter_mut().map(|poller| async move {
        poller.update().await;
        poller.snapshot()
    }))
    .await
}

fn log_snapshot(snapshot: &SensorSnapshot, stage: CycleStage) {
    if snapshot.available {
        info!(
            sensor = %snapshot.unique_id,
            state = snapshot.state.as_deref().unwrap_or_default(),
            attributes = %serde_json::Value::Object(snapshot.attributes.clone()),
            "{}: {}",
            snapshot.name,
            snapshot.state.as_deref().unwrap_or_default()
        );
    } else {
        warn!(sensor = %snapshot.unique_id, ?stage, "{} unavailable", snapshot.name);
    }
}

/// Polls every sensor on `interval` until Ctrl-C is received.
///
/// The first cycle runs immediately. A tick that falls due while a cycle is
/// still in flight is delayed rather than run concurrently.
pub async fn run_forever(pollers: Vec<RankPoller>, interval: Duration) -> Result<(), AppError> {
    info!(
        "Polling {} sensor(s) every {} seconds",
        pollers.len(),
        interval.as_secs()
    );

    let handles: Vec<_> = pollers
        .into_iter()
        .map(|mut poller| {
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(interval);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    let stage = poller.update().await;
                    log_snapshot(&poller.snapshot(), stage);
                }
            })
        })
        .collect();

    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested, stopping {} poller(s)", handles.len());

    for handle in handles {
        handle.abort();
        debug!("Poller task aborted: {}", handle.await.is_err());
    }

    Ok(())
}
