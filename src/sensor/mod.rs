//! The rank sensor: handle parsing, result composition and the poller itself.

pub mod poller;
pub mod rank;
pub mod riot_id;
pub mod state;

pub use poller::{CycleStage, CycleStep, PollError, RankPoller};
pub use rank::RankSummary;
pub use riot_id::RiotId;
pub use state::{PlayerSensorState, SensorSnapshot};
