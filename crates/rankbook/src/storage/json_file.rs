use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use super::{Ledger, LedgerStore};
use crate::error::{Error, Result};

/// Default ledger file name, relative to the working directory.
pub const DEFAULT_LEDGER_FILE: &str = ".accounts.json";

/// Ledger persisted as one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_LEDGER_FILE.to_string());
        self.path.with_file_name(format!("{}.tmp", name))
    }
}

impl LedgerStore for JsonFileStore {
    /// A missing (or blank) file is an empty ledger.
    fn load(&self) -> Result<Ledger> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No ledger at {}, starting empty", self.path.display());
                return Ok(Ledger::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Ledger::new());
        }

        let ledger: Ledger =
            serde_json::from_str(&content).map_err(|source| Error::CorruptLedger {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} accounts from {}", ledger.len(), self.path.display());
        Ok(ledger)
    }

    /// Write to a sibling temp file, then rename over the ledger.
    fn save(&mut self, ledger: &Ledger) -> Result<()> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        ledger.serialize(&mut serializer)?;

        let temp = self.temp_path();
        fs::write(&temp, &buf)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        debug!("Saved {} accounts to {}", ledger.len(), self.path.display());
        Ok(())
    }
}
