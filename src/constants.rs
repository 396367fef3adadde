//! Application-wide constants and default configuration values
//!
//! Every default that the configuration layer can override lives here so the
//! poller never reaches for shared mutable state.

/// Default timeout for required Riot API requests in seconds.
/// The Data Dragon version lookup is intentionally left without one.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Default time between polling cycles (15 minutes keeps well inside
/// personal API key limits).
pub const DEFAULT_SCAN_INTERVAL_SECONDS: u64 = 900;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Data Dragon version used until a fresh one has been fetched
pub const FALLBACK_DDRAGON_VERSION: &str = "14.1.1";

/// Header carrying the API key on every Riot API request
pub const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

/// Remote endpoint defaults
pub mod endpoints {
    /// Regional routing host for the account-v1 API
    pub const ACCOUNT_URL: &str = "https://europe.api.riotgames.com";

    /// Platform host template; `{region}` is replaced with the configured region
    pub const PLATFORM_URL: &str = "https://{region}.api.riotgames.com";

    /// Placeholder substituted in [`PLATFORM_URL`]
    pub const REGION_PLACEHOLDER: &str = "{region}";

    /// Data Dragon static asset host
    pub const DDRAGON_URL: &str = "https://ddragon.leagueoflegends.com";
}

/// Sensor presentation constants
pub mod sensor {
    /// Queue type whose standing becomes the sensor state
    pub const RANKED_SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

    /// State shown when the player has no solo queue entry
    pub const UNRANKED_STATE: &str = "Unranked";

    /// Material design icon shown next to the sensor
    pub const ICON: &str = "mdi:controller-classic";

    /// Prefix for the human readable sensor name
    pub const NAME_PREFIX: &str = "LoL";
}

/// Environment variables that override configuration file values
pub mod env_vars {
    pub const API_KEY: &str = "LOL_API_KEY";
    pub const LOG_FILE: &str = "LOL_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "LOL_HTTP_TIMEOUT";
}
