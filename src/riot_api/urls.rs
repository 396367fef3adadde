//! URL building utilities for Riot API and Data Dragon endpoints

use crate::constants::endpoints::REGION_PLACEHOLDER;

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// Builds the account-v1 URL resolving a Riot ID to an account.
///
/// # Arguments
/// * `account_url` - Regional routing host (e.g. `https://europe.api.riotgames.com`)
/// * `game_name` - Game name part of the Riot ID
/// * `tag_line` - Tag line part of the Riot ID
///
/// # Example
/// ```
/// use lol_rank_sensor::riot_api::build_account_url;
///
/// let url = build_account_url("https://europe.api.riotgames.com", "Tester", "EUW");
/// assert_eq!(
///     url,
///     "https://europe.api.riotgames.com/riot/account/v1/accounts/by-riot-id/Tester/EUW"
/// );
/// ```
pub fn build_account_url(account_url: &str, game_name: &str, tag_line: &str) -> String {
    format!(
        "{}/riot/account/v1/accounts/by-riot-id/{game_name}/{tag_line}",
        trim_base(account_url)
    )
}

/// Resolves the platform host for a region.
///
/// Every `{region}` placeholder in the template is replaced; a template
/// without a placeholder is returned unchanged. The region itself is not
/// checked against any known list.
///
/// # Example
/// ```
/// use lol_rank_sensor::riot_api::platform_url_for_region;
///
/// let url = platform_url_for_region("https://{region}.api.riotgames.com", "euw1");
/// assert_eq!(url, "https://euw1.api.riotgames.com");
///
/// let fixed = platform_url_for_region("http://127.0.0.1:8080/", "euw1");
/// assert_eq!(fixed, "http://127.0.0.1:8080");
/// ```
pub fn platform_url_for_region(template: &str, region: &str) -> String {
    trim_base(template).replace(REGION_PLACEHOLDER, region)
}

/// Builds the summoner-v4 URL for a PUUID on a platform host.
///
/// # Example
/// ```
/// use lol_rank_sensor::riot_api::build_summoner_url;
///
/// let url = build_summoner_url("https://euw1.api.riotgames.com", "abc-123");
/// assert_eq!(
///     url,
///     "https://euw1.api.riotgames.com/lol/summoner/v4/summoners/by-puuid/abc-123"
/// );
/// ```
pub fn build_summoner_url(platform_url: &str, puuid: &str) -> String {
    format!(
        "{}/lol/summoner/v4/summoners/by-puuid/{puuid}",
        trim_base(platform_url)
    )
}

/// Builds the league-v4 URL listing ranked entries of a summoner.
///
/// # Example
/// ```
/// use lol_rank_sensor::riot_api::build_league_entries_url;
///
/// let url = build_league_entries_url("https://euw1.api.riotgames.com", "sum-1");
/// assert_eq!(
///     url,
///     "https://euw1.api.riotgames.com/lol/league/v4/entries/by-summoner/sum-1"
/// );
/// ```
pub fn build_league_entries_url(platform_url: &str, summoner_id: &str) -> String {
    format!(
        "{}/lol/league/v4/entries/by-summoner/{summoner_id}",
        trim_base(platform_url)
    )
}

/// Builds the Data Dragon versions listing URL.
///
/// # Example
/// ```
/// use lol_rank_sensor::riot_api::build_versions_url;
///
/// let url = build_versions_url("https://ddragon.leagueoflegends.com");
/// assert_eq!(url, "https://ddragon.leagueoflegends.com/api/versions.json");
/// ```
pub fn build_versions_url(ddragon_url: &str) -> String {
    format!("{}/api/versions.json", trim_base(ddragon_url))
}

/// Builds the Data Dragon image URL of a profile icon.
///
/// # Example
/// ```
/// use lol_rank_sensor::riot_api::build_profile_icon_url;
///
/// let url = build_profile_icon_url("https://ddragon.leagueoflegends.com", "14.1.1", 4568);
/// assert_eq!(
///     url,
///     "https://ddragon.leagueoflegends.com/cdn/14.1.1/img/profileicon/4568.png"
/// );
/// ```
pub fn build_profile_icon_url(ddragon_url: &str, version: &str, icon_id: i64) -> String {
    format!(
        "{}/cdn/{version}/img/profileicon/{icon_id}.png",
        trim_base(ddragon_url)
    )
}
