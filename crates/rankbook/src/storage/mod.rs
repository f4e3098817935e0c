//! Ledger persistence.
//!
//! The whole ledger is read into memory at the start of a command and
//! written back in full at the end. There is no locking; the last save wins.

mod json_file;
mod ledger;
mod memory;

pub use json_file::{DEFAULT_LEDGER_FILE, JsonFileStore};
pub use ledger::Ledger;
pub use memory::MemoryStore;

use crate::error::Result;

pub trait LedgerStore {
    /// Read the full ledger. An absent backing store is an empty ledger.
    fn load(&self) -> Result<Ledger>;

    /// Replace the stored ledger with `ledger`.
    fn save(&mut self, ledger: &Ledger) -> Result<()>;
}
