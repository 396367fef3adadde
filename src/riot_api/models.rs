use serde::{Deserialize, Serialize};

/// Response of the account-v1 `by-riot-id` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub puuid: String,
    #[serde(rename = "gameName", default)]
    pub game_name: Option<String>,
    #[serde(rename = "tagLine", default)]
    pub tag_line: Option<String>,
}

/// Response of the summoner-v4 `by-puuid` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summoner {
    /// Encrypted summoner id used by league-v4
    pub id: String,
    #[serde(rename = "summonerLevel")]
    pub summoner_level: i64,
    #[serde(rename = "profileIconId")]
    pub profile_icon_id: i64,
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(rename = "revisionDate", default)]
    pub revision_date: Option<i64>,
}

/// One queue standing from the league-v4 `entries/by-summoner` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueEntry {
    #[serde(rename = "queueType")]
    pub queue_type: String,
    /// Missing on queues without divisions, e.g. Arena
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    #[serde(rename = "leaguePoints", default)]
    pub league_points: i32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(rename = "leagueId", default)]
    pub league_id: Option<String>,
    #[serde(rename = "hotStreak", default)]
    pub hot_streak: bool,
    #[serde(default)]
    pub veteran: bool,
    #[serde(rename = "freshBlood", default)]
    pub fresh_blood: bool,
    #[serde(default)]
    pub inactive: bool,
}
