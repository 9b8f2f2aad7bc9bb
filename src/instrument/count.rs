//! Call Counting Module
//!
//! Wrapper that increments a store-backed counter on every call.

use tracing::debug;

use crate::error::Result;
use crate::instrument::{counter_key, Method};
use crate::store::Store;

// == Count Calls ==
/// Counts invocations of the wrapped method under its qualified name.
#[derive(Debug, Clone)]
pub struct CountCalls<M> {
    inner: M,
}

/// Wraps `inner` so every call first runs `INCR <qualified name>`.
///
/// The counter is bumped before the call. If the increment fails the error
/// is returned and `inner` is not invoked.
pub fn count_calls<M>(inner: M) -> CountCalls<M> {
    CountCalls { inner }
}

impl<M, Args> Method<Args> for CountCalls<M>
where
    M: Method<Args>,
{
    type Output = M::Output;

    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    fn call(&mut self, store: &mut dyn Store, args: Args) -> Result<M::Output> {
        let calls = store.incr(&counter_key(self.inner.qualified_name()))?;
        debug!("{} call #{}", self.inner.qualified_name(), calls);
        self.inner.call(store, args)
    }
}
