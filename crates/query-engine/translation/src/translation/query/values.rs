//! Check and convert the values carried by filter nodes.

use filter_models::Value;
use query_engine_sql::sql;

/// Whether a value can be the operand of `=`, `>`, `>=`, `<` or `<=`.
///
/// Null is always accepted: equality against null is rendered as `IS NULL`.
pub fn is_comparable_scalar(value: &Value) -> bool {
    match value {
        Value::Null
        | Value::Bool(_)
        | Value::Integer(_)
        | Value::UInteger(_)
        | Value::Float(_)
        | Value::String(_) => true,
        Value::List(_) | Value::Object(_) => false,
    }
}

/// Whether a value can be the operand of a membership or array operator.
pub fn is_list_value(value: &Value) -> bool {
    matches!(value, Value::List(_))
}

/// Convert a filter value into a SQL value.
pub fn translate_value(value: &Value) -> sql::ast::Value {
    match value {
        Value::Null => sql::ast::Value::Null,
        Value::Bool(b) => sql::ast::Value::Bool(*b),
        Value::Integer(i) => sql::ast::Value::Int8(*i),
        Value::UInteger(u) => sql::ast::Value::Numeric(*u),
        Value::Float(f) => sql::ast::Value::Float8(*f),
        Value::String(s) => sql::ast::Value::String(s.clone()),
        Value::List(items) => sql::ast::Value::Array(items.iter().map(translate_value).collect()),
        // Serializing a value with string keys cannot fail.
        Value::Object(_) => {
            sql::ast::Value::JsonValue(serde_json::to_value(value).unwrap_or_default())
        }
    }
}
