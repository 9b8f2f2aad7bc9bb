//! Web Module
//!
//! Page fetching and the per-URL page cache.

mod fetcher;
mod page_cache;

pub use fetcher::{Fetcher, HttpFetcher};
pub use page_cache::{cache_key, count_key, PageCache, DEFAULT_PAGE_TTL};
