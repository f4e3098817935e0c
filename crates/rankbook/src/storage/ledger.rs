use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::account::AccountRecord;

/// Accounts keyed by `name#tag`, in insertion order.
///
/// Re-inserting an existing key replaces the record in place, keeping its
/// position. Serialized as a JSON object whose key order is the iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<(String, AccountRecord)>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&AccountRecord> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut AccountRecord> {
        self.position(key).map(move |i| &mut self.entries[i].1)
    }

    /// Insert or replace; returns the previous record for `key`.
    pub fn insert(&mut self, key: impl Into<String>, record: AccountRecord) -> Option<AccountRecord> {
        let key = key.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, record)),
            None => {
                self.entries.push((key, record));
                None
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AccountRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl Serialize for Ledger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for Ledger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LedgerVisitor;

        impl<'de> Visitor<'de> for LedgerVisitor {
            type Value = Ledger;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of name#tag to account records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Ledger, A::Error> {
                let mut ledger = Ledger::new();
                while let Some((key, record)) = map.next_entry::<String, AccountRecord>()? {
                    ledger.insert(key, record);
                }
                Ok(ledger)
            }
        }

        deserializer.deserialize_map(LedgerVisitor)
    }
}

impl FromIterator<(String, AccountRecord)> for Ledger {
    fn from_iter<I: IntoIterator<Item = (String, AccountRecord)>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        for (key, record) in iter {
            ledger.insert(key, record);
        }
        ledger
    }
}
