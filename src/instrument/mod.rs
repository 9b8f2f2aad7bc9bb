//! Instrumentation Module
//!
//! Call counting, call-history recording and replay for store-backed methods.
//!
//! Keys are derived from a method's qualified name in one place so every
//! wrapper and the replay reader agree:
//! - `<name>` - call counter
//! - `<name>:inputs` - formatted argument tuples
//! - `<name>:outputs` - formatted results

mod count;
mod history;
mod method;
mod replay;


pub use count::{count_calls, CountCalls};
pub use history::{call_history, CallHistory};
pub use method::{method, Method, Named};
pub use replay::{print_replay, replay, Replay, ReplayEntry};

// == Key Derivation ==
/// Counter key for a method.
pub fn counter_key(name: &str) -> String {
    name.to_string()
}

/// Input history key for a method.
pub fn inputs_key(name: &str) -> String {
    format!("{}:inputs", name)
}

/// Output history key for a method.
pub fn outputs_key(name: &str) -> String {
    format!("{}:outputs", name)
}
