//! Memory Store Module
//!
//! In-process store backend: a HashMap of entries with lazy TTL expiration
//! and Redis-compatible type rules.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::store::{resolve_range, Store, StoreEntry, StoredValue};

// == Memory Store ==
/// In-process key-value store with optional per-key expiration.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: HashMap<String, StoreEntry>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Live Entry ==
    /// Returns the entry at `key`, dropping it first if it has expired.
    fn live_entry(&mut self, key: &str) -> Option<&mut StoreEntry> {
        if self.entries.get(key).is_some_and(StoreEntry::is_expired) {
            self.entries.remove(key);
            debug!("Expired key removed on access: {}", key);
        }
        self.entries.get_mut(key)
    }

    // == Purge Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        if removed > 0 {
            debug!("Purged {} expired entries", removed);
        }
        removed
    }

    // == Time To Live ==
    /// Returns the remaining TTL of `key` in milliseconds.
    ///
    /// `None` if the key is absent or has no expiration.
    pub fn ttl_remaining_ms(&mut self, key: &str) -> Option<u64> {
        self.live_entry(key).and_then(|entry| entry.ttl_remaining_ms())
    }

    // == Length ==
    /// Returns the number of entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn wrong_type(key: &str, found: &StoredValue) -> Error {
    Error::WrongType(format!("key '{}' holds a {}", key, found.kind()))
}

impl Store for MemoryStore {
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.live_entry(key) {
            Some(StoreEntry {
                value: StoredValue::Bytes(bytes),
                ..
            }) => Ok(Some(bytes.clone())),
            Some(entry) => Err(wrong_type(key, &entry.value)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.entries.insert(
            key.to_string(),
            StoreEntry::persistent(StoredValue::Bytes(value.to_vec())),
        );
        Ok(())
    }

    fn setex(&mut self, key: &str, ttl_secs: u64, value: &[u8]) -> Result<()> {
        if ttl_secs == 0 {
            return Err(Error::Store(format!(
                "invalid expire time for '{}': ttl must be positive",
                key
            )));
        }
        let entry = StoreEntry::expiring(StoredValue::Bytes(value.to_vec()), ttl_secs)
            .ok_or_else(|| {
                Error::Store(format!(
                    "invalid expire time for '{}': ttl {}s is out of range",
                    key, ttl_secs
                ))
            })?;
        self.entries.insert(key.to_string(), entry);
        Ok(())
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        let next = match self.live_entry(key) {
            None => 1,
            Some(StoreEntry {
                value: StoredValue::Bytes(bytes),
                ..
            }) => std::str::from_utf8(bytes)
                .ok()
                .and_then(|text| text.parse::<i64>().ok())
                .ok_or_else(|| Error::NotAnInteger(key.to_string()))?
                .checked_add(1)
                .ok_or_else(|| {
                    Error::NotAnInteger(format!("increment of '{}' overflows", key))
                })?,
            Some(entry) => return Err(wrong_type(key, &entry.value)),
        };

        let encoded = next.to_string().into_bytes();
        match self.entries.get_mut(key) {
            // Expiration is kept, only the value changes.
            Some(entry) => entry.value = StoredValue::Bytes(encoded),
            None => self.set(key, &encoded)?,
        }
        Ok(next)
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        match self.live_entry(key) {
            Some(StoreEntry {
                value: StoredValue::List(items),
                ..
            }) => {
                items.push(value.to_vec());
                Ok(items.len())
            }
            Some(entry) => Err(wrong_type(key, &entry.value)),
            None => {
                self.entries.insert(
                    key.to_string(),
                    StoreEntry::persistent(StoredValue::List(vec![value.to_vec()])),
                );
                Ok(1)
            }
        }
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        match self.live_entry(key) {
            Some(StoreEntry {
                value: StoredValue::List(items),
                ..
            }) => Ok(resolve_range(items.len(), start, stop)
                .map(|(from, to)| items[from..=to].to_vec())
                .unwrap_or_default()),
            Some(entry) => Err(wrong_type(key, &entry.value)),
            None => Ok(Vec::new()),
        }
    }

    fn flushall(&mut self) -> Result<()> {
        let count = self.entries.len();
        self.entries.clear();
        debug!("Store flushed, {} keys removed", count);
        Ok(())
    }
}
