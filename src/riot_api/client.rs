//! Typed access to the three Riot API endpoints and Data Dragon

use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};

use super::fetch_utils::{FetchOptions, fetch};
use super::models::{Account, LeagueEntry, Summoner};
use super::urls::{
    build_account_url, build_league_entries_url, build_profile_icon_url, build_summoner_url,
    build_versions_url, platform_url_for_region,
};
use crate::config::Config;
use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, endpoints};
use crate::error::AppError;

/// Base URLs of the remote services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotEndpoints {
    /// Regional routing host serving account-v1
    pub account_url: String,
    /// Platform host template, `{region}` is substituted per request
    pub platform_url: String,
    /// Data Dragon host
    pub ddragon_url: String,
}

impl Default for RiotEndpoints {
    fn default() -> Self {
        Self {
            account_url: endpoints::ACCOUNT_URL.to_string(),
            platform_url: endpoints::PLATFORM_URL.to_string(),
            ddragon_url: endpoints::DDRAGON_URL.to_string(),
        }
    }
}

impl RiotEndpoints {
    /// Points every endpoint at the same base URL (handy for mock servers).
    pub fn single_host(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            account_url: base.clone(),
            platform_url: base.clone(),
            ddragon_url: base,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            account_url: config.account_url.clone(),
            platform_url: config.platform_url.clone(),
            ddragon_url: config.ddragon_url.clone(),
        }
    }

    /// Platform host for a region
    pub fn platform_url_for(&self, region: &str) -> String {
        platform_url_for_region(&self.platform_url, region)
    }
}

/// Riot API client shared by all pollers.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct RiotClient {
    http: Client,
    api_key: String,
    endpoints: RiotEndpoints,
    timeout: Duration,
}

impl fmt::Debug for RiotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiotClient")
            .field("api_key", &"<redacted>")
            .field("endpoints", &self.endpoints)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RiotClient {
    pub fn new(
        http: Client,
        api_key: impl Into<String>,
        endpoints: RiotEndpoints,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            endpoints,
            timeout,
        }
    }

    /// Builds a client from configuration, reusing an existing HTTP client.
    pub fn from_config(http: Client, config: &Config) -> Self {
        let timeout_seconds = if config.http_timeout_seconds == 0 {
            DEFAULT_HTTP_TIMEOUT_SECONDS
        } else {
            config.http_timeout_seconds
        };

        Self::new(
            http,
            config.api_key.clone(),
            RiotEndpoints::from_config(config),
            Duration::from_secs(timeout_seconds),
        )
    }

    pub fn endpoints(&self) -> &RiotEndpoints {
        &self.endpoints
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn required(&self) -> FetchOptions<'_> {
        FetchOptions {
            api_key: Some(&self.api_key),
            timeout: Some(self.timeout),
        }
    }

    /// Resolves a Riot ID to its account (PUUID).
    #[instrument(skip(self))]
    pub async fn fetch_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Account, AppError> {
        let url = build_account_url(&self.endpoints.account_url, game_name, tag_line);
        fetch(&self.http, &url, self.required()).await
    }

    /// Resolves a PUUID to the summoner on a region's platform.
    #[instrument(skip(self))]
    pub async fn fetch_summoner_by_puuid(
        &self,
        region: &str,
        puuid: &str,
    ) -> Result<Summoner, AppError> {
        let platform_url = self.endpoints.platform_url_for(region);
        let url = build_summoner_url(&platform_url, puuid);
        fetch(&self.http, &url, self.required()).await
    }

    /// Lists the ranked queue standings of a summoner.
    #[instrument(skip(self))]
    pub async fn fetch_league_entries(
        &self,
        region: &str,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntry>, AppError> {
        let platform_url = self.endpoints.platform_url_for(region);
        let url = build_league_entries_url(&platform_url, summoner_id);
        fetch(&self.http, &url, self.required()).await
    }

    /// Fetches the newest Data Dragon version.
    ///
    /// Sent without credentials or timeout; callers treat any error as
    /// "keep the version you already have".
    #[instrument(skip(self))]
    pub async fn fetch_latest_ddragon_version(&self) -> Result<String, AppError> {
        let url = build_versions_url(&self.endpoints.ddragon_url);
        let versions: Vec<String> = fetch(&self.http, &url, FetchOptions::default()).await?;

        let latest = versions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::api_no_data("Version list is empty", &url))?;
        debug!("Latest Data Dragon version: {latest}");
        Ok(latest)
    }

    /// Profile icon image URL for a Data Dragon version
    pub fn profile_icon_url(&self, version: &str, icon_id: i64) -> String {
        build_profile_icon_url(&self.endpoints.ddragon_url, version, icon_id)
    }
}
