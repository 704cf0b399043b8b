//! Dynamic values carried by expression nodes and ordering directives.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A value attached to an expression node.
///
/// Serialized untagged, so a query document uses plain JSON values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    /// An integer above `i64::MAX`. Kept exact instead of widening to a float.
    UInteger(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

/// The shape of a [`Value`], used when reporting a rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    List,
    Object,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Integer(_) | Value::UInteger(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<u64> for Value {
    fn from(i: u64) -> Self {
        i64::try_from(i).map_or(Value::UInteger(i), Value::Integer)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_plain_json_values() {
        let parsed: Vec<Value> =
            serde_json::from_str(r#"[null, true, 18, 1.5, "x", ["a", "b"], {"k": 1}]"#).unwrap();
        let kinds: Vec<ValueKind> = parsed.iter().map(Value::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValueKind::Null,
                ValueKind::Bool,
                ValueKind::Integer,
                ValueKind::Float,
                ValueKind::String,
                ValueKind::List,
                ValueKind::Object,
            ]
        );
    }

    #[test]
    fn integers_stay_integers() {
        let parsed: Value = serde_json::from_str("18").unwrap();
        assert_eq!(parsed, Value::Integer(18));
    }

    #[test]
    fn integers_beyond_i64_stay_exact() {
        let parsed: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(parsed, Value::UInteger(u64::MAX));
        assert_eq!(parsed.kind(), ValueKind::Integer);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "18446744073709551615");

        let negative: Value = serde_json::from_str("-9223372036854775808").unwrap();
        assert_eq!(negative, Value::Integer(i64::MIN));
    }

    #[test]
    fn converts_rust_values() {
        assert_eq!(Value::from(vec!["a", "b"]), Value::List(vec!["a".into(), "b".into()]));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::Integer(3));
        assert_eq!(Value::from(7_u64), Value::Integer(7));
        assert_eq!(Value::from(u64::MAX), Value::UInteger(u64::MAX));
    }
}
