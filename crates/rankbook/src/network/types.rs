use serde::Deserialize;

/// Riot account resolved from a Riot ID.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiotAccount {
    pub puuid: String,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
}

/// Summoner profile on a platform region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    #[serde(rename = "id")]
    pub summoner_id: String,
    #[serde(default)]
    pub puuid: String,
    pub summoner_level: u32,
}

/// One ranked queue entry for a summoner.
///
/// Some queues report entries without a tier or division. Missing fields read
/// as empty or zero so one sparse entry cannot fail the whole lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueEntry {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
}
