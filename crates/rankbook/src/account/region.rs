use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Platform routing region an account lives on.
///
/// Known regions are parsed case-insensitively and written in upper case
/// (`EUW1`, `KR`). Ledger files may hold region text from older tools; that
/// text is kept as `Other` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    Br1,
    Eun1,
    Euw1,
    Jp1,
    Kr,
    La1,
    La2,
    Me1,
    Na1,
    Oc1,
    Pbe1,
    Ph2,
    Ru,
    Sg2,
    Th2,
    Tr1,
    Tw2,
    Vn2,
    /// Region text no platform route is known for.
    Other(String),
}

impl Region {
    /// Every region with a known platform route.
    pub const KNOWN: [Region; 18] = [
        Region::Br1,
        Region::Eun1,
        Region::Euw1,
        Region::Jp1,
        Region::Kr,
        Region::La1,
        Region::La2,
        Region::Me1,
        Region::Na1,
        Region::Oc1,
        Region::Pbe1,
        Region::Ph2,
        Region::Ru,
        Region::Sg2,
        Region::Th2,
        Region::Tr1,
        Region::Tw2,
        Region::Vn2,
    ];

    /// Parse a known region. Unknown text is an error.
    pub fn parse(value: &str) -> Result<Self> {
        match Self::from_stored(value) {
            Self::Other(_) => Err(Error::UnknownRegion(value.to_string())),
            region => Ok(region),
        }
    }

    /// Parse region text read back from a ledger; never fails.
    pub fn from_stored(value: &str) -> Self {
        let trimmed = value.trim();
        Self::KNOWN
            .iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| Self::Other(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Br1 => "BR1",
            Self::Eun1 => "EUN1",
            Self::Euw1 => "EUW1",
            Self::Jp1 => "JP1",
            Self::Kr => "KR",
            Self::La1 => "LA1",
            Self::La2 => "LA2",
            Self::Me1 => "ME1",
            Self::Na1 => "NA1",
            Self::Oc1 => "OC1",
            Self::Pbe1 => "PBE1",
            Self::Ph2 => "PH2",
            Self::Ru => "RU",
            Self::Sg2 => "SG2",
            Self::Th2 => "TH2",
            Self::Tr1 => "TR1",
            Self::Tw2 => "TW2",
            Self::Vn2 => "VN2",
            Self::Other(text) => text,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Host label used in platform URLs (`euw1.api.riotgames.com`).
    pub fn host(&self) -> String {
        self.as_str().trim().to_ascii_lowercase()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Region::from_stored(&value))
    }
}

/// Region selection for listing accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionFilter {
    All,
    Only(Region),
}

impl RegionFilter {
    /// `all` (any case) selects every region; anything else must name a region.
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Region::parse(value).map(Self::Only)
        }
    }

    pub fn matches(&self, region: &Region) -> bool {
        match self {
            Self::All => true,
            Self::Only(r) => r == region,
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(r) => write!(f, "{}", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Region::parse("euw1").unwrap(), Region::Euw1);
        assert_eq!(Region::parse("KR").unwrap(), Region::Kr);
        assert_eq!(Region::parse(" Na1 ").unwrap(), Region::Na1);
        assert_eq!(Region::parse("pbe1").unwrap(), Region::Pbe1);
        assert!(matches!(
            Region::parse("EU"),
            Err(Error::UnknownRegion(_))
        ));
    }

    #[test]
    fn test_display_and_host() {
        assert_eq!(Region::Eun1.to_string(), "EUN1");
        assert_eq!(Region::Eun1.host(), "eun1");
        assert_eq!(Region::Kr.host(), "kr");
    }

    #[test]
    fn test_every_known_region_round_trips_through_its_name() {
        for region in Region::KNOWN {
            assert!(region.is_known());
            assert_eq!(Region::parse(&region.to_string()).unwrap(), region);
        }
    }

    #[test]
    fn test_serde_canonicalizes() {
        let region: Region = serde_json::from_str("\"euw1\"").unwrap();
        assert_eq!(region, Region::Euw1);
        assert_eq!(serde_json::to_string(&region).unwrap(), "\"EUW1\"");
    }

    #[test]
    fn test_unlisted_stored_region_is_kept() {
        let region: Region = serde_json::from_str("\"eu west\"").unwrap();
        assert_eq!(region, Region::Other("eu west".to_string()));
        assert!(!region.is_known());
        assert_eq!(serde_json::to_string(&region).unwrap(), "\"eu west\"");
    }

    #[test]
    fn test_filter() {
        let all = RegionFilter::parse("all").unwrap();
        assert!(all.matches(&Region::Kr));
        assert!(all.matches(&Region::Other("moon".to_string())));

        let na = RegionFilter::parse("NA1").unwrap();
        assert!(na.matches(&Region::Na1));
        assert!(!na.matches(&Region::Kr));

        assert!(RegionFilter::parse("moon").is_err());
    }
}
