//! Replay Module
//!
//! Reads a method's counter and call history back out of the store.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::instrument::{counter_key, inputs_key, outputs_key};
use crate::store::Store;

// == Replay ==
/// Recorded call history of one method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Replay {
    /// Qualified name of the method
    pub name: String,
    /// Counter value (0 when absent or not a number)
    pub calls: u64,
    /// Input/output pairs in call order
    pub entries: Vec<ReplayEntry>,
}

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayEntry {
    /// Formatted argument tuple
    pub input: String,
    /// Formatted result
    pub output: String,
}

impl fmt::Display for Replay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was called {} times:", self.name, self.calls)?;
        for entry in &self.entries {
            write!(f, "\n{}(*{}) -> {}", self.name, entry.input, entry.output)?;
        }
        Ok(())
    }
}

// == Replay Reader ==
/// Reads the history recorded for `name`.
///
/// Read-only. A missing or non-numeric counter reads as 0. Inputs and
/// outputs are paired by position; unmatched trailing entries are dropped.
pub fn replay(store: &mut dyn Store, name: &str) -> Result<Replay> {
    let calls: u64 = store
        .get(&counter_key(name))?
        .and_then(|raw| String::from_utf8(raw).ok())
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(0);

    let inputs = store.lrange(&inputs_key(name), 0, -1)?;
    let outputs = store.lrange(&outputs_key(name), 0, -1)?;

    let entries = inputs
        .into_iter()
        .zip(outputs)
        .map(|(input, output)| ReplayEntry {
            input: String::from_utf8_lossy(&input).into_owned(),
            output: String::from_utf8_lossy(&output).into_owned(),
        })
        .collect();

    Ok(Replay {
        name: name.to_string(),
        calls,
        entries,
    })
}

/// Prints the replay of `name` to stdout.
pub fn print_replay(store: &mut dyn Store, name: &str) -> Result<()> {
    println!("{}", replay(store, name)?);
    Ok(())
}
