use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::rank::RankSummary;
use super::riot_id::RiotId;
use crate::constants::sensor::{ICON, NAME_PREFIX};

/// Everything one tracked player's sensor knows between cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSensorState {
    pub riot_id: RiotId,
    pub region: String,
    /// PUUID, resolved once and kept for the lifetime of the entity
    pub account_id: Option<String>,
    /// Encrypted summoner id, re-resolved every cycle
    pub summoner_id: Option<String>,
    pub ddragon_version: String,
    pub ranked_state: Option<String>,
    pub attributes: Map<String, Value>,
    pub entity_picture: Option<String>,
    pub available: bool,
    pub last_updated: Option<DateTime<Utc>>,
}

impl PlayerSensorState {
    pub fn new(riot_id: RiotId, region: impl Into<String>, ddragon_version: impl Into<String>) -> Self {
        Self {
            riot_id,
            region: region.into(),
            account_id: None,
            summoner_id: None,
            ddragon_version: ddragon_version.into(),
            ranked_state: None,
            attributes: Map::new(),
            entity_picture: None,
            available: false,
            last_updated: None,
        }
    }

    /// Replaces the published values with the result of a successful cycle.
    pub(crate) fn commit(&mut self, summary: RankSummary, picture: String, now: DateTime<Utc>) {
        self.ranked_state = Some(summary.state);
        self.attributes = summary.attributes;
        self.entity_picture = Some(picture);
        self.available = true;
        self.last_updated = Some(now);
    }

    pub fn name(&self) -> String {
        format!("{NAME_PREFIX} {}", self.riot_id.game_name())
    }

    pub fn unique_id(&self) -> String {
        format!(
            "lol_{}_{}",
            self.riot_id.game_name(),
            self.riot_id.tag_line()
        )
        .to_lowercase()
    }

    pub fn snapshot(&self) -> SensorSnapshot {
        SensorSnapshot {
            name: self.name(),
            unique_id: self.unique_id(),
            icon: ICON,
            state: self.ranked_state.clone(),
            attributes: self.attributes.clone(),
            entity_picture: self.entity_picture.clone(),
            available: self.available,
            last_updated: self.last_updated,
        }
    }
}

/// What the host platform renders for one sensor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorSnapshot {
    pub name: String,
    pub unique_id: String,
    pub icon: &'static str,
    pub state: Option<String>,
    pub attributes: Map<String, Value>,
    pub entity_picture: Option<String>,
    pub available: bool,
    pub last_updated: Option<DateTime<Utc>>,
}
