//! Platform API access.

mod client;
mod mock;
mod types;

pub use client::{PlatformApi, RiotClient, connect};
pub use mock::MockPlatform;
pub use types::{LeagueEntry, RiotAccount, Summoner};
