//! Display values shown by a stat card

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar rendered as inline text.
///
/// Values are printed verbatim. Any grouping, rounding or units are the
/// caller's job, so `"1,204"` should be passed as text rather than as a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DisplayValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl DisplayValue {
    /// Is this value numeric?
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i32> for DisplayValue {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<i64> for DisplayValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<u32> for DisplayValue {
    fn from(v: u32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<u64> for DisplayValue {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(v) => Self::Integer(v),
            Err(_) => Self::Text(v.to_string()),
        }
    }
}

impl From<f32> for DisplayValue {
    fn from(v: f32) -> Self {
        Self::Float(v.into())
    }
}

impl From<f64> for DisplayValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for DisplayValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}
