//! redis_basic - instrumentation and caching over a key-value store
//!
//! Provides call counting, call-history recording and replay for
//! store-backed methods, a typed cache facade, and a per-URL page cache
//! with a fixed expiration.

pub mod cache;
pub mod config;
pub mod error;
pub mod instrument;
pub mod store;
pub mod web;

pub use cache::Cache;
pub use config::Config;
pub use error::{Error, Result};
pub use store::{MemoryStore, Store};
pub use web::PageCache;
