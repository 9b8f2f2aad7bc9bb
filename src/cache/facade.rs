//! Cache Facade Module
//!
//! Stores values under generated keys and reads them back with typed getters.

use tracing::info;
use uuid::Uuid;

use crate::cache::data::{to_int, to_str, Data};
use crate::error::Result;
use crate::instrument::{
    call_history, count_calls, method, replay, CallHistory, CountCalls, Method, Named, Replay,
};
use crate::store::Store;

/// Qualified name of the instrumented store operation.
pub const STORE_METHOD: &str = "Cache::store";

type StoreFn = fn(&mut dyn Store, (Data,)) -> Result<String>;
type InstrumentedStore = CallHistory<CountCalls<Named<StoreFn>>>;

/// Writes `data` under a fresh UUID v4 key and returns the key.
fn store_data(store: &mut dyn Store, (data,): (Data,)) -> Result<String> {
    let key = Uuid::new_v4().to_string();
    store.set(&key, &data.to_bytes())?;
    Ok(key)
}

// == Cache ==
/// Typed cache facade over an explicitly owned store handle.
///
/// Every `store` call is counted under [`STORE_METHOD`] and recorded in its
/// input/output history.
pub struct Cache<S> {
    store: S,
    store_method: InstrumentedStore,
}

impl<S: Store> Cache<S> {
    // == Constructor ==
    /// Takes ownership of `store` and flushes it, so every run starts from a
    /// clean slate.
    pub fn new(mut store: S) -> Result<Self> {
        store.flushall()?;
        info!("Cache initialized, store flushed");

        Ok(Self {
            store,
            store_method: call_history(count_calls(method(STORE_METHOD, store_data as StoreFn))),
        })
    }

    // == Store ==
    /// Stores `data` under a generated key and returns that key.
    pub fn store(&mut self, data: impl Into<Data>) -> Result<String> {
        self.store_method.call(&mut self.store, (data.into(),))
    }

    // == Get ==
    /// Reads `key` and passes the raw value, `None` if absent, through `conv`.
    pub fn get<T, F>(&mut self, key: &str, conv: F) -> Result<T>
    where
        F: FnOnce(Option<Vec<u8>>) -> Result<T>,
    {
        let raw = self.store.get(key)?;
        conv(raw)
    }

    /// Reads `key` without conversion.
    pub fn get_raw(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        self.store.get(key)
    }

    /// Reads `key` as UTF-8 text.
    pub fn get_str(&mut self, key: &str) -> Result<String> {
        self.get(key, to_str)
    }

    /// Reads `key` as a decimal integer.
    pub fn get_int(&mut self, key: &str) -> Result<i64> {
        self.get(key, to_int)
    }

    // == Replay ==
    /// Call history of [`Cache::store`].
    pub fn replay(&mut self) -> Result<Replay> {
        replay(&mut self.store, self.store_method.qualified_name())
    }

    // == Accessors ==
    /// Borrows the underlying store.
    pub fn store_handle(&mut self) -> &mut S {
        &mut self.store
    }

    /// Releases the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}
