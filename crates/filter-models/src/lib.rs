//! The storage-agnostic filter model: expression trees, ordering directives and
//! pagination, as produced by query-building code upstream of SQL translation.

pub mod expression;
pub mod ordering;
pub mod query;
pub mod value;

pub use expression::{Expression, Operator};
pub use ordering::{Order, OrderType};
pub use query::Query;
pub use value::{Value, ValueKind};

use schemars::schema::RootSchema;

/// The JSON Schema of a serialized [`Query`].
pub fn query_schema() -> RootSchema {
    schemars::schema_for!(Query)
}
