//! Cache Data Module
//!
//! Values accepted by `Cache::store` and converters for reading them back.

use std::fmt;

use crate::error::{Error, Result};

// == Data ==
/// A scalar the cache can store.
///
/// Everything is written as bytes: strings as UTF-8, numbers in decimal text
/// form, so an `Int` can be read back with `get_int` and incremented by the
/// store.
#[derive(Clone, PartialEq)]
pub enum Data {
    /// UTF-8 text
    Str(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
}

impl Data {
    /// Encodes the value as it is written to the store.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Data::Str(s) => s.as_bytes().to_vec(),
            Data::Bytes(b) => b.clone(),
            Data::Int(n) => n.to_string().into_bytes(),
            Data::Float(x) => format!("{:?}", x).into_bytes(),
        }
    }
}

// Debug output is what the call history records for each argument.
impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Data::Str(s) => write!(f, "{:?}", s),
            Data::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),
            Data::Int(n) => write!(f, "{}", n),
            Data::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<&str> for Data {
    fn from(value: &str) -> Self {
        Data::Str(value.to_string())
    }
}

impl From<String> for Data {
    fn from(value: String) -> Self {
        Data::Str(value)
    }
}

impl From<&[u8]> for Data {
    fn from(value: &[u8]) -> Self {
        Data::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Data {
    fn from(value: Vec<u8>) -> Self {
        Data::Bytes(value)
    }
}

impl From<i64> for Data {
    fn from(value: i64) -> Self {
        Data::Int(value)
    }
}

impl From<i32> for Data {
    fn from(value: i32) -> Self {
        Data::Int(value.into())
    }
}

impl From<f64> for Data {
    fn from(value: f64) -> Self {
        Data::Float(value)
    }
}

// == Converters ==
fn present(raw: Option<Vec<u8>>) -> Result<Vec<u8>> {
    raw.ok_or_else(|| Error::Conversion("no value stored under key".to_string()))
}

/// Decodes stored bytes as UTF-8 text.
pub fn to_str(raw: Option<Vec<u8>>) -> Result<String> {
    String::from_utf8(present(raw)?)
        .map_err(|e| Error::Conversion(format!("value is not valid UTF-8: {}", e)))
}

/// Parses stored bytes as a decimal integer.
pub fn to_int(raw: Option<Vec<u8>>) -> Result<i64> {
    let text = to_str(raw)?;
    text.trim()
        .parse()
        .map_err(|_| Error::Conversion(format!("invalid integer: {:?}", text)))
}

/// Parses stored bytes as a floating point number.
pub fn to_float(raw: Option<Vec<u8>>) -> Result<f64> {
    let text = to_str(raw)?;
    text.trim()
        .parse()
        .map_err(|_| Error::Conversion(format!("invalid float: {:?}", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_encoding() {
        assert_eq!(Data::from("foo").to_bytes(), b"foo".to_vec());
        assert_eq!(Data::from(b"bar".as_slice()).to_bytes(), b"bar".to_vec());
        assert_eq!(Data::from(42).to_bytes(), b"42".to_vec());
        assert_eq!(Data::from(-7i64).to_bytes(), b"-7".to_vec());
        assert_eq!(Data::from(3.5).to_bytes(), b"3.5".to_vec());
        assert_eq!(Data::from(1.0).to_bytes(), b"1.0".to_vec());
    }

    #[test]
    fn test_data_debug_format() {
        assert_eq!(format!("{:?}", (Data::from("foo"),)), r#"("foo",)"#);
        assert_eq!(format!("{:?}", (Data::from(b"b\x00r".to_vec()),)), r#"(b"b\x00r",)"#);
        assert_eq!(format!("{:?}", (Data::from(42),)), "(42,)");
        assert_eq!(format!("{:?}", (Data::from(2.5),)), "(2.5,)");
    }

    #[test]
    fn test_to_str() {
        assert_eq!(to_str(Some(b"hello".to_vec())).unwrap(), "hello");
        assert!(matches!(to_str(Some(vec![0xff, 0xfe])), Err(Error::Conversion(_))));
        assert!(matches!(to_str(None), Err(Error::Conversion(_))));
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int(Some(b"42".to_vec())).unwrap(), 42);
        assert_eq!(to_int(Some(b"-3".to_vec())).unwrap(), -3);
        assert!(matches!(to_int(Some(b"foo".to_vec())), Err(Error::Conversion(_))));
        assert!(matches!(to_int(None), Err(Error::Conversion(_))));
    }

    #[test]
    fn test_to_float() {
        assert_eq!(to_float(Some(b"3.5".to_vec())).unwrap(), 3.5);
        assert_eq!(to_float(Some(b"2".to_vec())).unwrap(), 2.0);
        assert!(matches!(to_float(Some(b"x".to_vec())), Err(Error::Conversion(_))));
    }
}
