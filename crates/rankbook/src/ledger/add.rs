use tracing::info;

use super::fetch_snapshot;
use crate::account::{AccountRecord, Region, RiotId};
use crate::codec;
use crate::error::{Error, Result};
use crate::network::PlatformApi;
use crate::storage::LedgerStore;

/// Fetch an account and store it under `key`, replacing any record with the
/// same key.
///
/// Nothing is written unless all three lookups succeed.
pub fn add<S, A>(
    store: &mut S,
    api: &A,
    region: Region,
    key: &str,
    username: &str,
    password: &str,
) -> Result<AccountRecord>
where
    S: LedgerStore + ?Sized,
    A: PlatformApi + ?Sized,
{
    let id = RiotId::parse(key)?;
    if !region.is_known() {
        return Err(Error::UnknownRegion(region.to_string()));
    }
    let username = codec::encode(username)?;
    let password = codec::encode(password)?;

    let mut ledger = store.load()?;
    let snapshot = fetch_snapshot(api, &region, &id)?;
    let record = AccountRecord::new(region, username, password, snapshot.level, snapshot.ranks);

    if ledger.insert(key, record.clone()).is_some() {
        info!("Replaced existing account {}", key);
    }
    store.save(&ledger)?;

    info!("Added account {} ({})", key, record.region);
    Ok(record)
}
