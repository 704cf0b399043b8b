//! Ordering directives.

use enum_iterator::Sequence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// How a directive orders its field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Sequence, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Plain ascending/descending order on the field.
    #[default]
    Basic,
    /// Position of the field inside a reference array (`data`).
    ByArrayPosition,
    /// Number of elements of an array field.
    ByArrayCount,
}

/// A single ordering directive. Directives with an empty `field` are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Order {
    pub field: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub desc: bool,
    /// Reference array, only used by [`OrderType::ByArrayPosition`].
    pub data: Value,
}

impl Order {
    pub fn asc(field: impl Into<String>) -> Self {
        Order {
            field: field.into(),
            ..Self::default()
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::asc(field).descending()
    }

    pub fn by_array_position(field: impl Into<String>, data: impl Into<Value>) -> Self {
        Order {
            field: field.into(),
            order_type: OrderType::ByArrayPosition,
            data: data.into(),
            ..Self::default()
        }
    }

    pub fn by_array_count(field: impl Into<String>) -> Self {
        Order {
            field: field.into(),
            order_type: OrderType::ByArrayCount,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn descending(mut self) -> Self {
        self.desc = true;
        self
    }
}
