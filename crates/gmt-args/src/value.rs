//! Dynamically typed argument values.

use crate::error::{ArgsError, ArgsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single argument value as supplied by the caller.
///
/// Deserializes untagged, so JSON/TOML scalars and arrays map directly onto
/// the matching variant. `null` and objects have no argument representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered collection; the only variant sequence conversions act on.
    Seq(Vec<ArgValue>),
}

impl ArgValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[ArgValue]> {
        match self {
            ArgValue::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Join the display form of each element with `separator`.
    ///
    /// Returns `None` for anything that is not a sequence; strings are never
    /// split or re-joined.
    pub fn join(&self, separator: &str) -> Option<String> {
        let items = self.as_seq()?;
        Some(
            items
                .iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join(separator),
        )
    }

    /// Convert a JSON value, rejecting `null` and objects.
    pub fn from_json(value: serde_json::Value) -> ArgsResult<Self> {
        use serde_json::Value;

        match value {
            Value::Bool(b) => Ok(ArgValue::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(ArgValue::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(ArgValue::Float(f))
                } else {
                    Err(ArgsError::UnsupportedValue(n.to_string()))
                }
            }
            Value::String(s) => Ok(ArgValue::Str(s)),
            Value::Array(items) => items
                .into_iter()
                .map(ArgValue::from_json)
                .collect::<ArgsResult<Vec<_>>>()
                .map(ArgValue::Seq),
            Value::Null => Err(ArgsError::UnsupportedValue("null".to_string())),
            Value::Object(_) => Err(ArgsError::UnsupportedValue(
                "objects cannot be passed as module arguments".to_string(),
            )),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Bool(b) => write!(f, "{}", b),
            ArgValue::Int(i) => write!(f, "{}", i),
            // shortest round-trip form, switching to exponents for extremes
            ArgValue::Float(x) => write!(f, "{:?}", x),
            ArgValue::Str(s) => f.write_str(s),
            ArgValue::Seq(_) => f.write_str(&self.join("/").unwrap_or_default()),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        ArgValue::Bool(b)
    }
}

impl From<i32> for ArgValue {
    fn from(i: i32) -> Self {
        ArgValue::Int(i64::from(i))
    }
}

impl From<i64> for ArgValue {
    fn from(i: i64) -> Self {
        ArgValue::Int(i)
    }
}

impl From<f64> for ArgValue {
    fn from(x: f64) -> Self {
        ArgValue::Float(x)
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::Str(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::Str(s)
    }
}

impl<T: Into<ArgValue>> From<Vec<T>> for ArgValue {
    fn from(items: Vec<T>) -> Self {
        ArgValue::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ArgValue>, const N: usize> From<[T; N]> for ArgValue {
    fn from(items: [T; N]) -> Self {
        ArgValue::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<serde_json::Value> for ArgValue {
    type Error = ArgsError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        ArgValue::from_json(value)
    }
}
