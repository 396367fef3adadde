//! One polling cycle: Riot ID -> PUUID -> summoner -> ranked standings.

use chrono::Utc;
use std::fmt;
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use super::rank;
use super::riot_id::RiotId;
use super::state::{PlayerSensorState, SensorSnapshot};
use crate::config::SensorConfig;
use crate::error::AppError;
use crate::riot_api::RiotClient;

/// How far a cycle got. Stages only ever move forward; any failure jumps
/// to [`CycleStage::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CycleStage {
    NotStarted,
    AccountResolved,
    SummonerResolved,
    RankResolved,
    Failed,
}

impl CycleStage {
    /// The following stage on the happy path; terminal stages stay put.
    pub fn next(self) -> Self {
        match self {
            CycleStage::NotStarted => CycleStage::AccountResolved,
            CycleStage::AccountResolved => CycleStage::SummonerResolved,
            CycleStage::SummonerResolved => CycleStage::RankResolved,
            CycleStage::RankResolved => CycleStage::RankResolved,
            CycleStage::Failed => CycleStage::Failed,
        }
    }
}

/// The remote call a cycle was making when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStep {
    Account,
    Summoner,
    League,
}

impl fmt::Display for CycleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CycleStep::Account => "account",
            CycleStep::Summoner => "summoner",
            CycleStep::League => "league",
        };
        f.write_str(name)
    }
}

/// Why a cycle aborted.
#[derive(Debug, Error)]
#[error("{step} lookup failed (reached {reached:?}): {source}")]
pub struct PollError {
    pub step: CycleStep,
    /// Last stage completed before the failing call
    pub reached: CycleStage,
    #[source]
    pub source: AppError,
}

impl PollError {
    fn at(step: CycleStep, reached: CycleStage) -> impl FnOnce(AppError) -> Self {
        move |source| Self {
            step,
            reached,
            source,
        }
    }
}

/// Polls the Riot API for a single player and keeps the sensor state.
#[derive(Debug)]
pub struct RankPoller {
    client: RiotClient,
    state: PlayerSensorState,
}

impl RankPoller {
    pub fn new(
        client: RiotClient,
        riot_id: RiotId,
        region: impl Into<String>,
        fallback_ddragon_version: impl Into<String>,
    ) -> Self {
        Self {
            client,
            state: PlayerSensorState::new(riot_id, region, fallback_ddragon_version),
        }
    }

    /// Builds a poller from a configured sensor entry.
    ///
    /// Fails without producing a poller when the name is not `Name#Tag`.
    pub fn from_config(
        client: RiotClient,
        sensor: &SensorConfig,
        fallback_ddragon_version: &str,
    ) -> Result<Self, AppError> {
        let riot_id = RiotId::parse(&sensor.name)?;
        Ok(Self::new(
            client,
            riot_id,
            sensor.region.clone(),
            fallback_ddragon_version,
        ))
    }

    pub fn state(&self) -> &PlayerSensorState {
        &self.state
    }

    pub fn snapshot(&self) -> SensorSnapshot {
        self.state.snapshot()
    }

    pub fn is_available(&self) -> bool {
        self.state.available
    }

    /// Stage the next cycle starts from.
    pub fn starting_stage(&self) -> CycleStage {
        if self.state.account_id.is_some() {
            CycleStage::AccountResolved
        } else {
            CycleStage::NotStarted
        }
    }

    /// Runs one update and never fails: errors are logged and turned into
    /// `available = false`, leaving the previous state and attributes intact.
    pub async fn update(&mut self) -> CycleStage {
        match self.run_cycle().await {
            Ok(stage) => {
                info!(
                    riot_id = %self.state.riot_id,
                    state = self.state.ranked_state.as_deref().unwrap_or_default(),
                    "Sensor updated"
                );
                stage
            }
            Err(e) => {
                error!(
                    riot_id = %self.state.riot_id,
                    step = %e.step,
                    "Error updating League sensor: {e}"
                );
                self.state.available = false;
                CycleStage::Failed
            }
        }
    }

    /// Runs the fetch chain once and commits the result on success.
    ///
    /// Nothing is written to the published state unless every required step
    /// succeeds. The only values kept from a failed cycle are the identifiers
    /// resolved before the failure.
    #[instrument(skip(self), fields(riot_id = %self.state.riot_id, region = %self.state.region))]
    pub async fn run_cycle(&mut self) -> Result<CycleStage, PollError> {
        let mut stage = CycleStage::NotStarted;

        let puuid = match self.state.account_id.clone() {
            Some(puuid) => {
                debug!("Using memoized account id");
                puuid
            }
            None => {
                self.refresh_ddragon_version().await;
                let account = self
                    .client
                    .fetch_account_by_riot_id(
                        self.state.riot_id.game_name(),
                        self.state.riot_id.tag_line(),
                    )
                    .await
                    .map_err(PollError::at(CycleStep::Account, stage))?;
                self.state.account_id = Some(account.puuid.clone());
                account.puuid
            }
        };
        stage = stage.next();

        let summoner = self
            .client
            .fetch_summoner_by_puuid(&self.state.region, &puuid)
            .await
            .map_err(PollError::at(CycleStep::Summoner, stage))?;
        self.state.summoner_id = Some(summoner.id.clone());
        stage = stage.next();

        let entries = self
            .client
            .fetch_league_entries(&self.state.region, &summoner.id)
            .await
            .map_err(PollError::at(CycleStep::League, stage))?;
        stage = stage.next();

        let summary = rank::compose(&summoner, &entries);
        let picture = self
            .client
            .profile_icon_url(&self.state.ddragon_version, summoner.profile_icon_id);
        self.state.commit(summary, picture, Utc::now());

        Ok(stage)
    }

    async fn refresh_ddragon_version(&mut self) {
        match self.client.fetch_latest_ddragon_version().await {
            Ok(version) => self.state.ddragon_version = version,
            Err(e) => warn!(
                "Could not fetch Data Dragon version, keeping {}: {e}",
                self.state.ddragon_version
            ),
        }
    }
}
