//! The filter expression tree.

use std::fmt;

use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// The operator of an expression node.
///
/// Serialized as its tag, e.g. `"EQ"` or `"HASANY"`. Tags this version does not
/// know are kept in [`Operator::Other`] so the translator can report them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    #[default]
    Noop,
    And,
    Or,
    Equal,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    In,
    /// Array contains every element of the value.
    Has,
    /// Array shares at least one element with the value.
    HasAny,
    Prefix,
    Suffix,
    Contains,
    Other(String),
}

impl Operator {
    /// Tags of every operator known to this version.
    pub const KNOWN_TAGS: &'static [&'static str] = &[
        "NOOP", "AND", "OR", "EQ", "GT", "GTE", "LT", "LTE", "IN", "HAS", "HASANY", "PREFIX",
        "SUFFIX", "CONTAINS",
    ];

    pub fn tag(&self) -> &str {
        match self {
            Operator::Noop => "NOOP",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Equal => "EQ",
            Operator::GreaterThan => "GT",
            Operator::GreaterThanOrEqual => "GTE",
            Operator::LessThan => "LT",
            Operator::LessThanOrEqual => "LTE",
            Operator::In => "IN",
            Operator::Has => "HAS",
            Operator::HasAny => "HASANY",
            Operator::Prefix => "PREFIX",
            Operator::Suffix => "SUFFIX",
            Operator::Contains => "CONTAINS",
            Operator::Other(tag) => tag,
        }
    }

    /// AND and OR, whose meaning comes from their operands.
    pub fn is_logical(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }
}

impl From<String> for Operator {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "" | "NOOP" => Operator::Noop,
            "AND" => Operator::And,
            "OR" => Operator::Or,
            "EQ" => Operator::Equal,
            "GT" => Operator::GreaterThan,
            "GTE" => Operator::GreaterThanOrEqual,
            "LT" => Operator::LessThan,
            "LTE" => Operator::LessThanOrEqual,
            "IN" => Operator::In,
            "HAS" => Operator::Has,
            "HASANY" => Operator::HasAny,
            "PREFIX" => Operator::Prefix,
            "SUFFIX" => Operator::Suffix,
            "CONTAINS" => Operator::Contains,
            _ => Operator::Other(tag),
        }
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Other(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl JsonSchema for Operator {
    fn schema_name() -> String {
        "Operator".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            enum_values: Some(
                Operator::KNOWN_TAGS
                    .iter()
                    .map(|tag| serde_json::Value::from(*tag))
                    .collect(),
            ),
            ..Default::default()
        }
        .into()
    }
}

/// A node of the filter tree.
///
/// Logical nodes (AND/OR) only use `operands`; leaf nodes only use `field` and
/// `value`. Every field is optional in a serialized document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Expression {
    pub op: Operator,
    pub field: String,
    pub value: Value,
    pub not: bool,
    pub operands: Vec<Expression>,
}

impl Expression {
    pub fn noop() -> Self {
        Self::default()
    }

    pub fn and(operands: Vec<Expression>) -> Self {
        Self::group(Operator::And, operands)
    }

    pub fn or(operands: Vec<Expression>) -> Self {
        Self::group(Operator::Or, operands)
    }

    pub fn equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::leaf(Operator::Equal, field, value)
    }

    pub fn greater_than(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::leaf(Operator::GreaterThan, field, value)
    }

    pub fn greater_or_equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::leaf(Operator::GreaterThanOrEqual, field, value)
    }

    pub fn less_than(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::leaf(Operator::LessThan, field, value)
    }

    pub fn less_or_equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::leaf(Operator::LessThanOrEqual, field, value)
    }

    pub fn one_of(field: impl Into<String>, values: impl Into<Value>) -> Self {
        Self::leaf(Operator::In, field, values)
    }

    pub fn has(field: impl Into<String>, values: impl Into<Value>) -> Self {
        Self::leaf(Operator::Has, field, values)
    }

    pub fn has_any(field: impl Into<String>, values: impl Into<Value>) -> Self {
        Self::leaf(Operator::HasAny, field, values)
    }

    pub fn prefix(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf(Operator::Prefix, field, Value::String(value.into()))
    }

    pub fn suffix(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf(Operator::Suffix, field, Value::String(value.into()))
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf(Operator::Contains, field, Value::String(value.into()))
    }

    /// Flip the negation flag of this node.
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.not = !self.not;
        self
    }

    /// Build a leaf node for any operator, including ones unknown to this version.
    pub fn leaf(op: Operator, field: impl Into<String>, value: impl Into<Value>) -> Self {
        Expression {
            op,
            field: field.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    fn group(op: Operator, operands: Vec<Expression>) -> Self {
        Expression {
            op,
            operands,
            ..Self::default()
        }
    }
}
