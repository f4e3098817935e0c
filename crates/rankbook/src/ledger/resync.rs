use tracing::{debug, info};

use super::{AccountSnapshot, fetch_snapshot};
use crate::account::RiotId;
use crate::error::{Error, Result};
use crate::network::PlatformApi;
use crate::storage::LedgerStore;

/// Progress notification after each account is attempted.
#[derive(Debug)]
pub struct ResyncProgress<'a> {
    /// 1-based position in ledger order.
    pub position: usize,
    pub total: usize,
    pub key: &'a str,
    pub error: Option<&'a Error>,
}

/// Outcome of a resync, partitioned by account.
#[derive(Debug, Default)]
pub struct ResyncReport {
    pub updated: Vec<String>,
    pub failed: Vec<(String, Error)>,
}

impl ResyncReport {
    pub fn total(&self) -> usize {
        self.updated.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Refresh level and ranks for every account, in ledger order.
///
/// A failing account is left untouched and reported; the rest are still
/// updated. The ledger is saved once, after every account was attempted.
pub fn resync<S, A, F>(store: &mut S, api: &A, mut on_progress: F) -> Result<ResyncReport>
where
    S: LedgerStore + ?Sized,
    A: PlatformApi + ?Sized,
    F: FnMut(ResyncProgress<'_>),
{
    let mut ledger = store.load()?;
    let total = ledger.len();

    let outcomes: Vec<(String, Result<AccountSnapshot>)> = ledger
        .iter()
        .enumerate()
        .map(|(i, (key, record))| {
            let outcome = RiotId::parse(key).and_then(|id| fetch_snapshot(api, &record.region, &id));
            on_progress(ResyncProgress {
                position: i + 1,
                total,
                key,
                error: outcome.as_ref().err(),
            });
            (key.to_string(), outcome)
        })
        .collect();

    let report = outcomes
        .into_iter()
        .fold(ResyncReport::default(), |mut report, (key, outcome)| {
            match outcome {
                Ok(snapshot) => {
                    if let Some(record) = ledger.get_mut(&key) {
                        record.refresh(snapshot.level, snapshot.ranks);
                    }
                    report.updated.push(key);
                }
                Err(e) => {
                    debug!("Failed to update account {}: {}", key, e);
                    report.failed.push((key, e));
                }
            }
            report
        });

    store.save(&ledger)?;
    info!(
        "Resynced {} of {} accounts ({} failed)",
        report.updated.len(),
        total,
        report.failed.len()
    );
    Ok(report)
}
