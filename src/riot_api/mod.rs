pub mod client;
pub mod http_client;
pub mod models;
pub mod urls;
mod fetch_utils;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client;
pub use client::{RiotClient, RiotEndpoints};
pub use models::{Account, LeagueEntry, Summoner};
