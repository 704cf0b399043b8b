//! The query: a filter tree plus ordering and pagination.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::expression::Expression;
use crate::ordering::Order;

/// What to select, update or delete, and how.
///
/// A `limit` or `offset` of zero means the clause is not emitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Query {
    pub expr: Expression,
    pub order: Vec<Order>,
    pub limit: u64,
    pub offset: u64,
}

impl Query {
    pub fn new(expr: Expression) -> Self {
        Query {
            expr,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: Order) -> Self {
        self.order.push(order);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }
}
