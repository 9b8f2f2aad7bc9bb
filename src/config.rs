//! Configuration Module
//!
//! Handles loading configuration from environment variables and opening the
//! configured store.

use std::env;

use crate::error::{Error, Result};
use crate::store::{MemoryStore, RedisStore, Store};
use crate::web::DEFAULT_PAGE_TTL;

/// Store URL selecting the in-process backend.
pub const MEMORY_STORE_URL: &str = "memory";

/// Configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// `memory` or a `redis://` URL
    pub store_url: String,
    /// Page cache TTL in seconds
    pub page_ttl: u64,
    /// URL fetched by the web demo when none is given
    pub page_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `STORE_URL` - Store backend (default: memory)
    /// - `PAGE_TTL` - Page cache TTL in seconds (default: 10)
    /// - `PAGE_URL` - Default page for the web demo (default: http://example.com)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            store_url: env::var("STORE_URL").unwrap_or(defaults.store_url),
            page_ttl: env::var("PAGE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(defaults.page_ttl),
            page_url: env::var("PAGE_URL").unwrap_or(defaults.page_url),
        }
    }

    /// Opens the store named by `store_url`.
    pub fn open_store(&self) -> Result<Box<dyn Store>> {
        if self.store_url == MEMORY_STORE_URL {
            Ok(Box::new(MemoryStore::new()))
        } else if self.store_url.starts_with("redis://") || self.store_url.starts_with("rediss://")
        {
            Ok(Box::new(RedisStore::open(&self.store_url)?))
        } else {
            Err(Error::Config(format!(
                "unsupported store URL '{}', expected '{}' or redis://",
                self.store_url, MEMORY_STORE_URL
            )))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: MEMORY_STORE_URL.to_string(),
            page_ttl: DEFAULT_PAGE_TTL,
            page_url: "http://example.com".to_string(),
        }
    }
}
