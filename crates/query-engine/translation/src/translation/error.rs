//! Errors for query translation.

use std::fmt;

use filter_models::{Operator, ValueKind};

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("value for field {field} is not comparable (kind: {kind})")]
    NonComparableValue { field: String, kind: ValueKind },
    #[error("value for {operator} must be a list (field: {field})")]
    NonListValue { operator: Operator, field: String },
    #[error("value for {operator} must be a string (field: {field})")]
    NonStringValue { operator: Operator, field: String },
    #[error("{operator} condition without a field")]
    MissingField { operator: Operator },
    #[error("UPDATE without assignments is not permitted")]
    NoAssignments,
    #[error("{0} without conditions is not permitted")]
    UnconditionedMutation(Mutation),
}

/// The statements that must carry a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Update,
    Delete,
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mutation::Update => write!(f, "UPDATE"),
            Mutation::Delete => write!(f, "DELETE"),
        }
    }
}
