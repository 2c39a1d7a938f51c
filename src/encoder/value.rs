//! Encodable values and the JSON encoder.
//!
//! [`EncodableValue`] is the closed set of shapes a response body may carry.
//! Encoding is total: every variant has exactly one rule, and anything outside
//! the set goes through [`EncodableValue::rendered`] and is emitted as a
//! quoted string.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// ISO-8601 with milliseconds and numeric offset, e.g. `2022-01-21T16:00:00.000+0000`.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

#[derive(Debug, Clone, PartialEq)]
pub enum EncodableValue {
    Null,
    String(String),
    Integer(i64),
    /// Non-finite values encode as `null`.
    Float(f64),
    Bool(bool),
    Date(DateTime<Utc>),
    Array(Vec<EncodableValue>),
    Object(BTreeMap<String, EncodableValue>),
    /// Display output of a type the encoder has no rule for.
    Rendered(String),
}

impl EncodableValue {
    /// Fallback for application types: encode their display form as a string.
    pub fn rendered(value: &impl fmt::Display) -> Self {
        Self::Rendered(value.to_string())
    }

    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<EncodableValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Encode a value as JSON text. Never fails.
pub fn escape_json(value: &EncodableValue) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

impl Serialize for EncodableValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::String(s) | Self::Rendered(s) => serializer.serialize_str(s),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Date(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<&str> for EncodableValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EncodableValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for EncodableValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<i32> for EncodableValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for EncodableValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for EncodableValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u64> for EncodableValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Self::Integer)
            .unwrap_or_else(|_| Self::rendered(&value))
    }
}

impl From<usize> for EncodableValue {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(Self::Integer)
            .unwrap_or_else(|_| Self::rendered(&value))
    }
}

impl From<f64> for EncodableValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for EncodableValue {
    fn from(value: f32) -> Self {
        // Widening through the shortest decimal form keeps 3.14f32 as 3.14.
        Self::Float(value.to_string().parse().unwrap_or(f64::from(value)))
    }
}

impl From<bool> for EncodableValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for EncodableValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<EncodableValue>> From<Option<T>> for EncodableValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<EncodableValue>> From<Vec<T>> for EncodableValue {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<&[String]> for EncodableValue {
    fn from(value: &[String]) -> Self {
        Self::Array(value.iter().map(Into::into).collect())
    }
}

impl<T: Into<EncodableValue>> From<BTreeMap<String, T>> for EncodableValue {
    fn from(value: BTreeMap<String, T>) -> Self {
        Self::object(value)
    }
}

impl<T: Into<EncodableValue>> From<HashMap<String, T>> for EncodableValue {
    fn from(value: HashMap<String, T>) -> Self {
        Self::object(value)
    }
}

impl From<serde_json::Value> for EncodableValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => n
                    .as_f64()
                    .map(Self::Float)
                    .unwrap_or_else(|| Self::rendered(&n)),
            },
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(entries) => Self::object(entries),
        }
    }
}
