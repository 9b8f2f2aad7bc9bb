//! Store Entry Module
//!
//! Defines a single stored value (byte string or list) with optional expiry.

use std::time::{SystemTime, UNIX_EPOCH};

// == Stored Value ==
/// The two kinds of value a key can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    /// Plain byte string (SET / SETEX / INCR)
    Bytes(Vec<u8>),
    /// Ordered list (RPUSH / LRANGE)
    List(Vec<Vec<u8>>),
}

impl StoredValue {
    /// Name used in wrong-type error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            StoredValue::Bytes(_) => "string",
            StoredValue::List(_) => "list",
        }
    }
}

// == Store Entry ==
/// Represents a single store entry with value and expiry metadata.
#[derive(Debug, Clone)]
pub struct StoreEntry {
    /// The stored value
    pub value: StoredValue,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl StoreEntry {
    // == Constructors ==
    /// Creates an entry that never expires.
    pub fn persistent(value: StoredValue) -> Self {
        Self {
            value,
            expires_at: None,
        }
    }

    /// Creates an entry expiring `ttl_seconds` from now.
    ///
    /// Returns None when the expiry timestamp does not fit in a u64.
    pub fn expiring(value: StoredValue, ttl_seconds: u64) -> Option<Self> {
        let expires_at = ttl_seconds
            .checked_mul(1000)
            .and_then(|ms| current_timestamp_ms().checked_add(ms))?;
        Some(Self {
            value,
            expires_at: Some(expires_at),
        })
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// the expiration time.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, or None if no expiration is set.
    pub fn ttl_remaining_ms(&self) -> Option<u64> {
        self.expires_at
            .map(|expires| expires.saturating_sub(current_timestamp_ms()))
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
