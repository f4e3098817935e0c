//! Scripted platform for testing.
//!
//! Serves canned accounts, summoners and league entries from memory, so
//! ledger operations can be exercised without network access. Anything not
//! scripted answers with HTTP 404.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::{LeagueEntry, PlatformApi, RiotAccount, Summoner};
use crate::account::{Region, RiotId};
use crate::error::{Error, FetchStep, Result};

#[derive(Debug, Default)]
pub struct MockPlatform {
    accounts: HashMap<String, RiotAccount>,
    summoners: HashMap<String, Summoner>,
    leagues: HashMap<String, Vec<LeagueEntry>>,
    failures: HashMap<(FetchStep, String), u16>,
    calls: RefCell<Vec<String>>,
    regions: RefCell<HashSet<Region>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a full account: Riot ID → puuid → summoner → league entries.
    pub fn with_player(
        mut self,
        key: &str,
        puuid: &str,
        summoner_id: &str,
        level: u32,
        entries: Vec<LeagueEntry>,
    ) -> Self {
        self.accounts.insert(
            key.to_string(),
            RiotAccount {
                puuid: puuid.to_string(),
                game_name: None,
                tag_line: None,
            },
        );
        self.summoners.insert(
            puuid.to_string(),
            Summoner {
                summoner_id: summoner_id.to_string(),
                puuid: puuid.to_string(),
                summoner_level: level,
            },
        );
        self.leagues.insert(summoner_id.to_string(), entries);
        self
    }

    /// Make `step` answer with `status` for the given lookup key
    /// (`name#tag`, puuid or summoner id depending on the step).
    pub fn with_failure(mut self, step: FetchStep, key: &str, status: u16) -> Self {
        self.failures.insert((step, key.to_string()), status);
        self
    }

    /// Calls made so far, as `step:key`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Platform regions used by summoner and league lookups.
    pub fn regions_used(&self) -> HashSet<Region> {
        self.regions.borrow().clone()
    }

    fn lookup<T: Clone>(&self, step: FetchStep, key: &str, table: &HashMap<String, T>) -> Result<T> {
        self.calls.borrow_mut().push(format!("{}:{}", step, key));

        if let Some(&status) = self.failures.get(&(step, key.to_string())) {
            return Err(Error::Api { step, status });
        }
        table
            .get(key)
            .cloned()
            .ok_or(Error::Api { step, status: 404 })
    }
}

impl PlatformApi for MockPlatform {
    fn account_by_riot_id(&self, id: &RiotId) -> Result<RiotAccount> {
        self.lookup(FetchStep::Account, &id.to_string(), &self.accounts)
    }

    fn summoner_by_puuid(&self, region: &Region, puuid: &str) -> Result<Summoner> {
        self.regions.borrow_mut().insert(region.clone());
        self.lookup(FetchStep::Summoner, puuid, &self.summoners)
    }

    fn league_entries(&self, region: &Region, summoner_id: &str) -> Result<Vec<LeagueEntry>> {
        self.regions.borrow_mut().insert(region.clone());
        self.lookup(FetchStep::League, summoner_id, &self.leagues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscripted_lookup_is_404() {
        let mock = MockPlatform::new();
        let err = mock
            .account_by_riot_id(&RiotId::parse("a#b").unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Api {
                step: FetchStep::Account,
                status: 404
            }
        ));
        assert_eq!(mock.calls(), vec!["account lookup:a#b"]);
    }

    #[test]
    fn test_scripted_failure_wins() {
        let mock = MockPlatform::new()
            .with_player("a#b", "p", "s", 1, vec![])
            .with_failure(FetchStep::League, "s", 503);
        assert!(mock.summoner_by_puuid(&Region::Kr, "p").is_ok());
        assert!(matches!(
            mock.league_entries(&Region::Kr, "s"),
            Err(Error::Api { status: 503, .. })
        ));
    }
}
