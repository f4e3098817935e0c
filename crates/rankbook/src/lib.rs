//! # rankbook
//!
//! Core library for the rankbook account ledger.
//!
//! This crate provides:
//! - The account data model (regions, tiers, divisions, two-queue rank summary)
//! - Reversible credential masking (not encryption)
//! - A blocking client for the platform's account, summoner and league endpoints
//! - Ledger persistence behind the `LedgerStore` trait
//! - Ledger operations: `add`, `resync` and `show`
//! - Table, TSV and JSON rendering

pub mod account;
pub mod codec;
pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod network;
pub mod retry;
pub mod storage;

// Re-export from account module
pub use account::{
    AccountRecord, Division, QueueStanding, RankSummary, Region, RegionFilter, RiotId, Tier,
    rank_tier_key,
};

// Re-export from config module
pub use config::{AccountRoute, PlatformConfig};

// Re-export from error module
pub use error::{Error, FetchStep, Result};

// Re-export from export module
pub use export::{AccountRow, ExportFormat, HIDDEN, render};

// Re-export from ledger module
pub use ledger::{ResyncProgress, ResyncReport, ShowOptions, add, resync, show};

// Re-export from network module
pub use network::{MockPlatform, PlatformApi, RiotClient, connect};

// Re-export from retry module
pub use retry::{ExponentialBackoff, NoRetry, RetryStrategy};

// Re-export from storage module
pub use storage::{DEFAULT_LEDGER_FILE, JsonFileStore, Ledger, LedgerStore, MemoryStore};
