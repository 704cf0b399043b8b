//! Detect whether a filter tree actually filters anything.

use filter_models::{Expression, Operator};

/// True if the tree contains at least one leaf condition.
///
/// Empty groups and no-op nodes are not conditions. Unknown operators count as
/// conditions here; translating them fails later.
pub fn has_conditions(expression: &Expression) -> bool {
    if expression.op == Operator::Noop || expression.op.is_logical() {
        expression.operands.iter().any(has_conditions)
    } else {
        true
    }
}
