//! Account data model.
//!
//! - `Region` / `RegionFilter` - platform routing regions
//! - `Tier`, `Division`, `QueueStanding`, `RankSummary` - ranked standings
//! - `RiotId`, `AccountRecord` - the tracked account and its key

mod rank;
mod record;
mod region;

pub use rank::*;
pub use record::{AccountRecord, RiotId};
pub use region::{Region, RegionFilter};

/// Sort key placing the strongest solo standing first.
///
/// Ranked accounts order by ladder position, then division; unknown tiers
/// and divisions sort after every known one. Unranked accounts come after
/// all ranked ones, highest level first.
pub fn rank_tier_key(record: &AccountRecord) -> (usize, i64) {
    let after_ladder = Tier::LADDER.len();
    let solo = &record.solo;

    if solo.tier.is_unranked() {
        return (after_ladder, -i64::from(record.level));
    }

    let tier = solo.tier.ladder_index().unwrap_or(after_ladder);
    let division = solo.division.as_ref().and_then(Division::index).unwrap_or(4);
    (tier, division as i64)
}
