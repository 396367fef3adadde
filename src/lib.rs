//! League of Legends rank sensor library
//!
//! Polls the Riot API for a player's solo queue standing and exposes it as a
//! single sensor value plus attributes, the shape home-automation platforms
//! consume.
//!
//! # Examples
//!
//! ```rust,no_run
//! use lol_rank_sensor::error::AppError;
//! use lol_rank_sensor::riot_api::{RiotClient, RiotEndpoints, create_http_client};
//! use lol_rank_sensor::sensor::{RankPoller, RiotId};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = RiotClient::new(
//!         create_http_client()?,
//!         "RGAPI-...",
//!         RiotEndpoints::default(),
//!         Duration::from_secs(10),
//!     );
//!     let mut poller = RankPoller::new(client, RiotId::parse("Faker#KR1")?, "kr", "14.1.1");
//!
//!     poller.update().await;
//!     let snapshot = poller.snapshot();
//!     println!("{}: {:?}", snapshot.name, snapshot.state);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod riot_api;
pub mod runner;
pub mod sensor;

// Re-export commonly used types for convenience
pub use config::{Config, SensorConfig};
pub use error::AppError;
pub use riot_api::{RiotClient, RiotEndpoints};
pub use sensor::{CycleStage, PlayerSensorState, RankPoller, RiotId, SensorSnapshot};
