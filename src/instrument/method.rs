//! Method Module
//!
//! The callable abstraction the instrumentation wrappers compose over.

use crate::error::Result;
use crate::store::Store;

// == Method Trait ==
/// A named operation run against a store.
///
/// Wrappers such as [`CountCalls`](super::CountCalls) and
/// [`CallHistory`](super::CallHistory) implement this trait themselves, so
/// they nest: each keeps the argument and output types of what it wraps and
/// reports the same qualified name.
pub trait Method<Args> {
    /// Value returned by a successful call.
    type Output;

    /// Identity used to derive counter and history keys.
    fn qualified_name(&self) -> &str;

    /// Runs the operation.
    fn call(&mut self, store: &mut dyn Store, args: Args) -> Result<Self::Output>;
}

// == Named Function ==
/// A plain function or closure paired with its qualified name.
#[derive(Clone)]
pub struct Named<F> {
    name: &'static str,
    func: F,
}

/// Names `func` so it can be wrapped, e.g. `method("Cache::store", store_data)`.
pub fn method<F, Args, R>(name: &'static str, func: F) -> Named<F>
where
    F: FnMut(&mut dyn Store, Args) -> Result<R>,
{
    Named { name, func }
}

impl<F, Args, R> Method<Args> for Named<F>
where
    F: FnMut(&mut dyn Store, Args) -> Result<R>,
{
    type Output = R;

    fn qualified_name(&self) -> &str {
        self.name
    }

    fn call(&mut self, store: &mut dyn Store, args: Args) -> Result<R> {
        (self.func)(store, args)
    }
}

impl<F> std::fmt::Debug for Named<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Named").field("name", &self.name).finish()
    }
}
