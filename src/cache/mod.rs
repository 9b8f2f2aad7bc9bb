//! Cache Module
//!
//! Typed cache facade whose store operation is counted and recorded.

mod data;
mod facade;

pub use data::{to_float, to_int, to_str, Data};
pub use facade::{Cache, STORE_METHOD};
