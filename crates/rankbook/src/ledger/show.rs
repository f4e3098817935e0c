use crate::account::{RegionFilter, rank_tier_key};
use crate::error::Result;
use crate::export::AccountRow;
use crate::storage::{Ledger, LedgerStore};

#[derive(Debug, Clone)]
pub struct ShowOptions {
    pub filter: RegionFilter,
    /// Decode credentials instead of masking them.
    pub reveal: bool,
}

/// Load the ledger and build display rows.
pub fn show<S: LedgerStore + ?Sized>(store: &S, options: &ShowOptions) -> Result<Vec<AccountRow>> {
    let ledger = store.load()?;
    select(&ledger, options)
}

/// Rows for accounts matching the region filter, strongest solo standing first.
pub fn select(ledger: &Ledger, options: &ShowOptions) -> Result<Vec<AccountRow>> {
    let mut accounts: Vec<_> = ledger
        .iter()
        .filter(|(_, record)| options.filter.matches(&record.region))
        .collect();
    accounts.sort_by_key(|(_, record)| rank_tier_key(record));

    accounts
        .into_iter()
        .map(|(key, record)| AccountRow::new(key, record, options.reveal))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{AccountRecord, Division, RankSummary, Region, Tier};
    use crate::codec;
    use crate::export::HIDDEN;

    fn record(region: Region, tier: Tier, division: Option<Division>, level: u32) -> AccountRecord {
        let mut ranks = RankSummary::default();
        ranks.solo.tier = tier;
        ranks.solo.division = division;
        AccountRecord::new(
            region,
            codec::encode("user").unwrap(),
            codec::encode("pass").unwrap(),
            level,
            ranks,
        )
    }

    fn sample() -> Ledger {
        vec![
            ("gold#1", record(Region::Na1, Tier::Gold, Some(Division::IV), 100)),
            ("low#1", record(Region::Kr, Tier::Unranked, None, 30)),
            ("dia#1", record(Region::Euw1, Tier::Diamond, Some(Division::II), 100)),
            ("high#1", record(Region::Na1, Tier::Unranked, None, 50)),
            ("iron#1", record(Region::Kr, Tier::Iron, Some(Division::I), 100)),
        ]
        .into_iter()
        .map(|(k, r)| (k.to_string(), r))
        .collect()
    }

    fn keys(rows: &[AccountRow]) -> Vec<&str> {
        rows.iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_standing() {
        let options = ShowOptions {
            filter: RegionFilter::All,
            reveal: false,
        };
        let rows = select(&sample(), &options).unwrap();
        assert_eq!(keys(&rows), vec!["dia#1", "gold#1", "iron#1", "high#1", "low#1"]);
    }

    #[test]
    fn test_region_filter() {
        let options = ShowOptions {
            filter: RegionFilter::Only(Region::Na1),
            reveal: false,
        };
        let rows = select(&sample(), &options).unwrap();
        assert_eq!(keys(&rows), vec!["gold#1", "high#1"]);
        assert!(rows.iter().all(|r| r.region == "NA1"));
    }

    #[test]
    fn test_masked_and_revealed_credentials() {
        let masked = ShowOptions {
            filter: RegionFilter::All,
            reveal: false,
        };
        for row in select(&sample(), &masked).unwrap() {
            assert_eq!(row.username, HIDDEN);
            assert_eq!(row.password, HIDDEN);
        }

        let revealed = ShowOptions {
            reveal: true,
            ..masked
        };
        for row in select(&sample(), &revealed).unwrap() {
            assert_eq!(row.username, "user");
            assert_eq!(row.password, "pass");
        }
    }
}
