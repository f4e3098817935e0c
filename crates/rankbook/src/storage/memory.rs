use std::io;

use super::{Ledger, LedgerStore};
use crate::error::Result;

/// In-memory ledger store for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    ledger: Ledger,
    saves: usize,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger,
            ..Self::default()
        }
    }

    /// Every `save` fails with a permission error.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Last saved (or initial) ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Ledger> {
        Ok(self.ledger.clone())
    }

    fn save(&mut self, ledger: &Ledger) -> Result<()> {
        if self.read_only {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only").into());
        }
        self.ledger = ledger.clone();
        self.saves += 1;
        Ok(())
    }
}
