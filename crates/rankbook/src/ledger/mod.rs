//! Ledger operations: add one account, resync all, list for display.
//!
//! Each operation loads the full ledger from a [`LedgerStore`], works on it in
//! memory and, for `add`/`resync`, saves it back exactly once.

mod add;
mod resync;
mod show;

pub use add::add;
pub use resync::{ResyncProgress, ResyncReport, resync};
pub use show::{ShowOptions, select, show};

use tracing::debug;

use crate::account::{RankSummary, Region, RiotId};
use crate::error::Result;
use crate::network::PlatformApi;

/// Level and ranks fetched from the platform for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub level: u32,
    pub ranks: RankSummary,
}

/// Run the three platform lookups in order; each needs the previous result.
pub fn fetch_snapshot<A: PlatformApi + ?Sized>(
    api: &A,
    region: &Region,
    id: &RiotId,
) -> Result<AccountSnapshot> {
    let account = api.account_by_riot_id(id)?;
    let summoner = api.summoner_by_puuid(region, &account.puuid)?;
    let entries = api.league_entries(region, &summoner.summoner_id)?;
    debug!(
        "Fetched {} on {}: level {}, {} league entries",
        id,
        region,
        summoner.summoner_level,
        entries.len()
    );

    Ok(AccountSnapshot {
        level: summoner.summoner_level,
        ranks: RankSummary::from_entries(&entries),
    })
}
