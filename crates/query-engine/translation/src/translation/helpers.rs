//! Helpers shared by the translation steps.

use query_engine_sql::sql;

/// Refer to a field of the filter model. Field paths are trusted and emitted verbatim.
pub fn column(field: &str) -> sql::ast::Expression {
    sql::ast::Expression::ColumnReference(sql::ast::ColumnName(field.to_string()))
}
