//! Error types for the store wrappers
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Error Enum ==
/// Unified error type for store, conversion and fetch failures.
#[derive(Error, Debug)]
pub enum Error {
    /// Store backend unreachable or command rejected
    #[error("Store error: {0}")]
    Store(String),

    /// Operation against a key holding the wrong kind of value
    #[error("Wrong type: {0}")]
    WrongType(String),

    /// INCR on a value that is not a decimal integer
    #[error("Value is not an integer: {0}")]
    NotAnInteger(String),

    /// Stored bytes could not be converted to the requested type
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Network failure while fetching a page
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Unusable configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl From<redis::RedisError> for Error {
    fn from(err: redis::RedisError) -> Self {
        Error::Store(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;
