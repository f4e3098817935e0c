use std::fmt;

use serde::{Deserialize, Serialize};

use super::rank::{Division, QueueStanding, RankSummary, Tier};
use super::region::Region;
use crate::error::{Error, Result};

/// `name#tag` identity of an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RiotId {
    pub name: String,
    pub tag: String,
}

impl RiotId {
    /// Split `name#tag`. Exactly one `#` with non-empty parts on both sides.
    pub fn parse(key: &str) -> Result<Self> {
        match key.split_once('#') {
            Some((name, tag)) if !name.is_empty() && !tag.is_empty() && !tag.contains('#') => {
                Ok(Self {
                    name: name.to_string(),
                    tag: tag.to_string(),
                })
            }
            _ => Err(Error::InvalidRiotId(key.to_string())),
        }
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.tag)
    }
}

/// One tracked account.
///
/// `username` and `password` hold masked text (see [`crate::codec`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredRecord", into = "StoredRecord")]
pub struct AccountRecord {
    pub region: Region,
    pub username: String,
    pub password: String,
    pub level: u32,
    pub solo: QueueStanding,
    pub flex: QueueStanding,
}

impl AccountRecord {
    pub fn new(
        region: Region,
        username: String,
        password: String,
        level: u32,
        ranks: RankSummary,
    ) -> Self {
        Self {
            region,
            username,
            password,
            level,
            solo: ranks.solo,
            flex: ranks.flex,
        }
    }

    /// Overwrite level and ranks; region and credentials stay untouched.
    pub fn refresh(&mut self, level: u32, ranks: RankSummary) {
        self.level = level;
        self.solo = ranks.solo;
        self.flex = ranks.flex;
    }
}

/// Flat on-disk layout of a record.
///
/// `rank`/`tier` are the solo tier and division; the `flex_` fields mirror
/// them for the flex queue.
#[derive(Serialize, Deserialize)]
struct StoredRecord {
    region: Region,
    username: String,
    password: String,
    level: u32,
    rank: Tier,
    tier: String,
    league_points: u32,
    wins: u32,
    losses: u32,
    flex_rank: Tier,
    flex_tier: String,
    flex_league_points: u32,
    flex_wins: u32,
    flex_losses: u32,
}

impl From<StoredRecord> for AccountRecord {
    fn from(s: StoredRecord) -> Self {
        Self {
            region: s.region,
            username: s.username,
            password: s.password,
            level: s.level,
            solo: QueueStanding {
                tier: s.rank,
                division: Division::parse(&s.tier),
                league_points: s.league_points,
                wins: s.wins,
                losses: s.losses,
            },
            flex: QueueStanding {
                tier: s.flex_rank,
                division: Division::parse(&s.flex_tier),
                league_points: s.flex_league_points,
                wins: s.flex_wins,
                losses: s.flex_losses,
            },
        }
    }
}

impl From<AccountRecord> for StoredRecord {
    fn from(r: AccountRecord) -> Self {
        Self {
            region: r.region,
            username: r.username,
            password: r.password,
            level: r.level,
            tier: r.solo.division_str().to_string(),
            rank: r.solo.tier,
            league_points: r.solo.league_points,
            wins: r.solo.wins,
            losses: r.solo.losses,
            flex_tier: r.flex.division_str().to_string(),
            flex_rank: r.flex.tier,
            flex_league_points: r.flex.league_points,
            flex_wins: r.flex.wins,
            flex_losses: r.flex.losses,
        }
    }
}
