//! Store Module
//!
//! The minimal key-value contract every component is written against, plus
//! an in-process backend and a Redis backend.

mod entry;
mod memory;
mod remote;

#[cfg(test)]
mod property_tests;

pub use entry::{StoreEntry, StoredValue};
pub use memory::MemoryStore;
pub use remote::RedisStore;

use crate::error::Result;

// == Store Trait ==
/// Key-value operations needed by the wrappers and caches.
///
/// Every method takes `&mut self`: a backend may hold a single connection,
/// and the in-memory backend drops expired entries lazily on access.
pub trait Store {
    /// Returns the value at `key`, or `None` if absent or expired.
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Overwrites `key` with `value` and clears any expiration.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Overwrites `key` with `value`, expiring after `ttl_secs` seconds.
    fn setex(&mut self, key: &str, ttl_secs: u64, value: &[u8]) -> Result<()>;

    /// Increments the integer at `key` (absent counts as 0) and returns it.
    fn incr(&mut self, key: &str) -> Result<i64>;

    /// Appends `value` to the list at `key` and returns the new length.
    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize>;

    /// Returns list elements `start..=stop`; negative indexes count from the end.
    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>>;

    /// Removes every key.
    fn flushall(&mut self) -> Result<()>;
}

impl<S: Store + ?Sized> Store for &mut S {
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    fn setex(&mut self, key: &str, ttl_secs: u64, value: &[u8]) -> Result<()> {
        (**self).setex(key, ttl_secs, value)
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        (**self).incr(key)
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        (**self).rpush(key, value)
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        (**self).lrange(key, start, stop)
    }

    fn flushall(&mut self) -> Result<()> {
        (**self).flushall()
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    fn setex(&mut self, key: &str, ttl_secs: u64, value: &[u8]) -> Result<()> {
        (**self).setex(key, ttl_secs, value)
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        (**self).incr(key)
    }

    fn rpush(&mut self, key: &str, value: &[u8]) -> Result<usize> {
        (**self).rpush(key, value)
    }

    fn lrange(&mut self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        (**self).lrange(key, start, stop)
    }

    fn flushall(&mut self) -> Result<()> {
        (**self).flushall()
    }
}

// == Range Resolution ==
/// Resolves a Redis-style inclusive `start..=stop` pair against `len`.
///
/// Returns `None` when the range selects nothing.
pub(crate) fn resolve_range(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    let len = len as isize;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };

    if len == 0 || start > stop || start >= len {
        None
    } else {
        Some((start as usize, stop as usize))
    }
}
