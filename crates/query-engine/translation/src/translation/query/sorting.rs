//! Handle ordering translation.

use filter_models::{Order, OrderType};
use query_engine_sql::sql;

use super::values;
use crate::translation::helpers;

/// Convert ordering directives to ORDER BY elements, keeping their order.
/// Directives without a field are skipped.
pub fn translate_order_by(order: &[Order]) -> Vec<sql::ast::OrderByElement> {
    order
        .iter()
        .filter(|directive| !directive.field.is_empty())
        .map(translate_order_by_element)
        .collect()
}

fn translate_order_by_element(directive: &Order) -> sql::ast::OrderByElement {
    let field = helpers::column(&directive.field);
    let descending = directive.desc.then_some(sql::ast::OrderByDirection::Desc);

    match directive.order_type {
        OrderType::Basic => sql::ast::OrderByElement {
            target: field,
            direction: Some(descending.unwrap_or(sql::ast::OrderByDirection::Asc)),
        },
        // array_position($n, field): the reference array is a parameter.
        OrderType::ByArrayPosition => sql::ast::OrderByElement {
            target: sql::ast::Expression::FunctionCall {
                function: sql::ast::Function::ArrayPosition,
                args: vec![
                    sql::ast::Expression::Value(values::translate_value(&directive.data)),
                    field,
                ],
            },
            direction: descending,
        },
        OrderType::ByArrayCount => sql::ast::OrderByElement {
            target: sql::ast::Expression::FunctionCall {
                function: sql::ast::Function::Cardinality,
                args: vec![field],
            },
            direction: descending,
        },
    }
}
