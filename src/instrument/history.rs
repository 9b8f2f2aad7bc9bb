//! Call History Module
//!
//! Wrapper that records every call's arguments and result in two store lists.

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::instrument::{inputs_key, outputs_key, Method};
use crate::store::Store;

// == Call History ==
/// Records inputs and outputs of the wrapped method.
///
/// Arguments are pushed to `<name>:inputs` in their `Debug` form before the
/// call and the result to `<name>:outputs` in its `Display` form after it.
/// The Nth entries of both lists belong to the same call only while a single
/// caller uses the store; nothing here serializes concurrent callers.
#[derive(Debug, Clone)]
pub struct CallHistory<M> {
    inner: M,
}

/// Wraps `inner` so every call is appended to its input/output history.
pub fn call_history<M>(inner: M) -> CallHistory<M> {
    CallHistory { inner }
}

impl<M, Args> Method<Args> for CallHistory<M>
where
    M: Method<Args>,
    Args: fmt::Debug,
    M::Output: fmt::Display,
{
    type Output = M::Output;

    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    fn call(&mut self, store: &mut dyn Store, args: Args) -> Result<M::Output> {
        let name = self.inner.qualified_name().to_string();
        let in_key = inputs_key(&name);
        let out_key = outputs_key(&name);

        let input = format!("{:?}", args);
        store.rpush(&in_key, input.as_bytes())?;

        let output = self.inner.call(store, args)?;
        let rendered = output.to_string();
        store.rpush(&out_key, rendered.as_bytes())?;

        debug!("Recorded {}{} -> {}", name, input, rendered);
        Ok(output)
    }
}
