//! Translate a filter query into the WHERE, ORDER BY and LIMIT/OFFSET clauses of a SQL statement.

pub mod error;
pub mod helpers;
pub mod query;
