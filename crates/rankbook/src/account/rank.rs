//! Competitive tiers, divisions and the two-queue rank summary.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{AsRefStr, Display, EnumString};

use crate::network::LeagueEntry;

/// Stored division text for queues without a division.
pub const NO_DIVISION: &str = "-";

/// Stored tier text for queues without an entry.
pub const UNRANKED: &str = "Unranked";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tier {
    Challenger,
    Grandmaster,
    Master,
    Diamond,
    Emerald,
    Platinum,
    Gold,
    Silver,
    Bronze,
    Iron,
    Unranked,
    /// A tier name the ladder does not know about. Sorts after Iron.
    Other(String),
}

impl Tier {
    /// Ranked tiers from highest to lowest.
    pub const LADDER: [Tier; 10] = [
        Tier::Challenger,
        Tier::Grandmaster,
        Tier::Master,
        Tier::Diamond,
        Tier::Emerald,
        Tier::Platinum,
        Tier::Gold,
        Tier::Silver,
        Tier::Bronze,
        Tier::Iron,
    ];

    /// Parse a tier as reported by the platform (`DIAMOND`) or stored (`Unranked`).
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "CHALLENGER" => Self::Challenger,
            "GRANDMASTER" => Self::Grandmaster,
            "MASTER" => Self::Master,
            "DIAMOND" => Self::Diamond,
            "EMERALD" => Self::Emerald,
            "PLATINUM" => Self::Platinum,
            "GOLD" => Self::Gold,
            "SILVER" => Self::Silver,
            "BRONZE" => Self::Bronze,
            "IRON" => Self::Iron,
            "UNRANKED" => Self::Unranked,
            _ => Self::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Challenger => "CHALLENGER",
            Self::Grandmaster => "GRANDMASTER",
            Self::Master => "MASTER",
            Self::Diamond => "DIAMOND",
            Self::Emerald => "EMERALD",
            Self::Platinum => "PLATINUM",
            Self::Gold => "GOLD",
            Self::Silver => "SILVER",
            Self::Bronze => "BRONZE",
            Self::Iron => "IRON",
            Self::Unranked => UNRANKED,
            Self::Other(name) => name,
        }
    }

    /// Position on the ladder (0 = Challenger), `None` for unranked or unknown tiers.
    pub fn ladder_index(&self) -> Option<usize> {
        Self::LADDER.iter().position(|t| t == self)
    }

    pub fn is_unranked(&self) -> bool {
        matches!(self, Self::Unranked)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Tier::parse(&value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Division {
    I,
    II,
    III,
    IV,
    /// Division text outside I to IV, kept as read. Sorts after IV.
    Other(String),
}

impl Division {
    /// Parse a division; blank text and the sentinel yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "" | NO_DIVISION => None,
            "I" => Some(Self::I),
            "II" => Some(Self::II),
            "III" => Some(Self::III),
            "IV" => Some(Self::IV),
            _ => Some(Self::Other(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::Other(text) => text,
        }
    }

    /// 0 for I through 3 for IV; `None` for unrecognized text.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::I => Some(0),
            Self::II => Some(1),
            Self::III => Some(2),
            Self::IV => Some(3),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standing in a single ranked queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueStanding {
    pub tier: Tier,
    pub division: Option<Division>,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
}

impl QueueStanding {
    pub fn unranked() -> Self {
        Self {
            tier: Tier::Unranked,
            division: None,
            league_points: 0,
            wins: 0,
            losses: 0,
        }
    }

    /// Division as stored on disk, with the sentinel for "none".
    pub fn division_str(&self) -> &str {
        self.division.as_ref().map_or(NO_DIVISION, Division::as_str)
    }

    /// `DIAMOND II`, or just the tier when there is no division.
    pub fn label(&self) -> String {
        match &self.division {
            Some(division) => format!("{} {}", self.tier, division),
            None => self.tier.to_string(),
        }
    }
}

impl Default for QueueStanding {
    fn default() -> Self {
        Self::unranked()
    }
}

impl From<&LeagueEntry> for QueueStanding {
    fn from(entry: &LeagueEntry) -> Self {
        Self {
            tier: Tier::parse(&entry.tier),
            division: Division::parse(&entry.rank),
            league_points: entry.league_points,
            wins: entry.wins,
            losses: entry.losses,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
pub enum QueueType {
    #[strum(serialize = "RANKED_SOLO_5x5")]
    RankedSolo,
    #[strum(serialize = "RANKED_FLEX_SR")]
    RankedFlex,
}

/// Solo and flex standings for one account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankSummary {
    pub solo: QueueStanding,
    pub flex: QueueStanding,
}

impl RankSummary {
    /// Pick the first entry for each ranked queue; missing queues are unranked.
    pub fn from_entries(entries: &[LeagueEntry]) -> Self {
        let pick = |queue: QueueType| {
            let name: &str = queue.as_ref();
            entries
                .iter()
                .find(|e| e.queue_type == name)
                .map(QueueStanding::from)
                .unwrap_or_default()
        };

        Self {
            solo: pick(QueueType::RankedSolo),
            flex: pick(QueueType::RankedFlex),
        }
    }
}
