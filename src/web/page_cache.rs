//! Page Cache Module
//!
//! Counts accesses per URL and caches fetched pages with a fixed expiration.

use tracing::{debug, info, warn};

use crate::cache::to_int;
use crate::error::{Error, Result};
use crate::store::Store;
use crate::web::Fetcher;

/// Expiration of a cached page, in seconds.
pub const DEFAULT_PAGE_TTL: u64 = 10;

// == Key Derivation ==
/// Access counter key for `url`.
pub fn count_key(url: &str) -> String {
    format!("count:{}", url)
}

/// Cached body key for `url`.
pub fn cache_key(url: &str) -> String {
    format!("cache:{}", url)
}

// == Page Cache ==
/// Read-through page cache with per-URL access counting.
///
/// Each URL is either uncached or cached until its TTL elapses. The
/// count, lookup and write are separate store commands, so two callers can
/// both miss and both fetch.
#[derive(Debug)]
pub struct PageCache<S, F> {
    store: S,
    fetcher: F,
    ttl: u64,
}

impl<S: Store, F: Fetcher> PageCache<S, F> {
    // == Constructor ==
    /// Creates a page cache with the default 10 second expiration.
    pub fn new(store: S, fetcher: F) -> Self {
        Self {
            store,
            fetcher,
            ttl: DEFAULT_PAGE_TTL,
        }
    }

    /// Overrides the expiration of cached pages.
    ///
    /// A zero TTL is rejected up front; the store would refuse the write
    /// only after the page had been fetched.
    pub fn with_ttl(mut self, ttl_secs: u64) -> Result<Self> {
        if ttl_secs == 0 {
            return Err(Error::Config("page ttl must be positive".to_string()));
        }
        self.ttl = ttl_secs;
        Ok(self)
    }

    /// Expiration of cached pages in seconds.
    pub fn ttl(&self) -> u64 {
        self.ttl
    }

    // == Get Page ==
    /// Returns the body of `url`, from the cache when present.
    ///
    /// The access counter is incremented first, on hits and misses alike. A
    /// fetch error propagates with the counter already incremented and no
    /// cache entry written.
    pub fn get_page(&mut self, url: &str) -> Result<String> {
        let accesses = self.store.incr(&count_key(url))?;

        if let Some(cached) = self.store.get(&cache_key(url))? {
            debug!("Cache hit for {} (access #{})", url, accesses);
            return String::from_utf8(cached)
                .map_err(|e| Error::Conversion(format!("cached page is not UTF-8: {}", e)));
        }

        info!("Cache miss for {} (access #{}), fetching", url, accesses);
        let body = match self.fetcher.fetch(url) {
            Ok(body) => body,
            Err(e) => {
                warn!("Fetch of {} failed: {}", url, e);
                return Err(e);
            }
        };

        self.store.setex(&cache_key(url), self.ttl, body.as_bytes())?;
        Ok(body)
    }

    // == Access Count ==
    /// Number of `get_page` calls made for `url` (0 if never requested).
    pub fn access_count(&mut self, url: &str) -> Result<u64> {
        match self.store.get(&count_key(url))? {
            Some(raw) => Ok(to_int(Some(raw))?.max(0) as u64),
            None => Ok(0),
        }
    }

    // == Accessors ==
    /// Borrows the underlying store.
    pub fn store_handle(&mut self) -> &mut S {
        &mut self.store
    }

    /// Borrows the fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Releases the store and fetcher.
    pub fn into_parts(self) -> (S, F) {
        (self.store, self.fetcher)
    }
}
