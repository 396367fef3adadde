//! Turns raw summoner and league data into the sensor state and attributes

use serde_json::{Map, Value};

use crate::constants::sensor::{RANKED_SOLO_QUEUE, UNRANKED_STATE};
use crate::riot_api::models::{LeagueEntry, Summoner};

pub const ATTR_LEVEL: &str = "level";
pub const ATTR_PROFILE_ICON_ID: &str = "profile_icon_id";
pub const ATTR_LP: &str = "lp";
pub const ATTR_WINS: &str = "wins";
pub const ATTR_LOSSES: &str = "losses";
pub const ATTR_WINRATE: &str = "winrate";

/// State string and attributes produced by one successful cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RankSummary {
    pub state: String,
    pub attributes: Map<String, Value>,
}

/// Finds the ranked solo queue standing, if the player has one.
pub fn find_solo_queue(entries: &[LeagueEntry]) -> Option<&LeagueEntry> {
    entries
        .iter()
        .find(|entry| entry.queue_type == RANKED_SOLO_QUEUE)
}

/// Win percentage, unrounded.
///
/// Returns `None` when no games have been played, since no ratio exists.
pub fn win_rate(wins: u32, losses: u32) -> Option<f64> {
    let games = u64::from(wins) + u64::from(losses);
    if games == 0 {
        return None;
    }
    Some(f64::from(wins) / games as f64 * 100.0)
}

/// Formats a win rate the way the sensor exposes it, e.g. `60.0%`.
///
/// Rounds to one decimal place from the exact value, ties to even, so
/// `6.25` becomes `6.2%`.
pub fn format_win_rate(rate: f64) -> String {
    format!("{rate:.1}%")
}

/// Builds a fresh [`RankSummary`]; nothing from earlier cycles carries over.
pub fn compose(summoner: &Summoner, entries: &[LeagueEntry]) -> RankSummary {
    let mut attributes = Map::new();
    attributes.insert(ATTR_LEVEL.to_string(), Value::from(summoner.summoner_level));
    attributes.insert(
        ATTR_PROFILE_ICON_ID.to_string(),
        Value::from(summoner.profile_icon_id),
    );

    let Some(solo) = find_solo_queue(entries) else {
        return RankSummary {
            state: UNRANKED_STATE.to_string(),
            attributes,
        };
    };

    attributes.insert(ATTR_LP.to_string(), Value::from(solo.league_points));
    attributes.insert(ATTR_WINS.to_string(), Value::from(solo.wins));
    attributes.insert(ATTR_LOSSES.to_string(), Value::from(solo.losses));
    if let Some(rate) = win_rate(solo.wins, solo.losses) {
        attributes.insert(
            ATTR_WINRATE.to_string(),
            Value::from(format_win_rate(rate)),
        );
    }

    RankSummary {
        state: format!("{} {}", solo.tier, solo.rank),
        attributes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summoner() -> Summoner {
        Summoner {
            id: "summoner-abc".to_string(),
            summoner_level: 312,
            profile_icon_id: 4568,
            puuid: None,
            revision_date: None,
        }
    }

    fn entry(queue_type: &str, tier: &str, rank: &str, lp: i32, wins: u32, losses: u32) -> LeagueEntry {
        LeagueEntry {
            queue_type: queue_type.to_string(),
            tier: tier.to_string(),
            rank: rank.to_string(),
            league_points: lp,
            wins,
            losses,
            league_id: None,
            hot_streak: false,
            veteran: false,
            fresh_blood: false,
            inactive: false,
        }
    }

    fn formatted(wins: u32, losses: u32) -> Option<String> {
        win_rate(wins, losses).map(format_win_rate)
    }

    #[test]
    fn test_win_rate_rounding() {
        assert_eq!(win_rate(30, 20), Some(60.0));
        assert_eq!(formatted(2, 1).as_deref(), Some("66.7%"));
        assert_eq!(formatted(1, 2).as_deref(), Some("33.3%"));
        assert_eq!(formatted(0, 5).as_deref(), Some("0.0%"));
        assert_eq!(formatted(7, 0).as_deref(), Some("100.0%"));
        assert_eq!(formatted(120, 100).as_deref(), Some("54.5%"));
    }

    #[test]
    fn test_win_rate_ties_round_to_even() {
        assert_eq!(formatted(1, 15).as_deref(), Some("6.2%"));
        assert_eq!(formatted(1, 79).as_deref(), Some("1.2%"));
        assert_eq!(formatted(3, 13).as_deref(), Some("18.8%"));
    }

    #[test]
    fn test_win_rate_without_games() {
        assert_eq!(win_rate(0, 0), None);
    }

    #[test]
    fn test_format_win_rate() {
        assert_eq!(format_win_rate(60.0), "60.0%");
        assert_eq!(format_win_rate(66.7), "66.7%");
        assert_eq!(format_win_rate(100.0), "100.0%");
    }

    #[test]
    fn test_compose_ranked_solo() {
        let entries = vec![
            entry("RANKED_FLEX_SR", "SILVER", "I", 10, 3, 3),
            entry("RANKED_SOLO_5x5", "GOLD", "IV", 50, 30, 20),
        ];
        let summary = compose(&summoner(), &entries);

        assert_eq!(summary.state, "GOLD IV");
        assert_eq!(summary.attributes[ATTR_LEVEL], 312);
        assert_eq!(summary.attributes[ATTR_PROFILE_ICON_ID], 4568);
        assert_eq!(summary.attributes[ATTR_LP], 50);
        assert_eq!(summary.attributes[ATTR_WINS], 30);
        assert_eq!(summary.attributes[ATTR_LOSSES], 20);
        assert_eq!(summary.attributes[ATTR_WINRATE], "60.0%");
    }

    #[test]
    fn test_compose_flex_only_is_unranked() {
        let entries = vec![entry("RANKED_FLEX_SR", "PLATINUM", "II", 10, 3, 3)];
        let summary = compose(&summoner(), &entries);

        assert_eq!(summary.state, "Unranked");
        assert_eq!(summary.attributes.len(), 2);
        for key in [ATTR_LP, ATTR_WINS, ATTR_LOSSES, ATTR_WINRATE] {
            assert!(!summary.attributes.contains_key(key), "{key} should be absent");
        }
    }

    #[test]
    fn test_compose_no_entries() {
        let summary = compose(&summoner(), &[]);
        assert_eq!(summary.state, "Unranked");
        assert_eq!(summary.attributes[ATTR_LEVEL], 312);
    }

    #[test]
    fn test_compose_zero_games_omits_winrate() {
        let entries = vec![entry("RANKED_SOLO_5x5", "IRON", "IV", 0, 0, 0)];
        let summary = compose(&summoner(), &entries);

        assert_eq!(summary.state, "IRON IV");
        assert_eq!(summary.attributes[ATTR_WINS], 0);
        assert_eq!(summary.attributes[ATTR_LOSSES], 0);
        assert!(!summary.attributes.contains_key(ATTR_WINRATE));
    }
}
