//! A SQL AST for the statements we emit, and its rendering to parameterized SQL.

pub mod ast;
pub mod convert;
pub mod helpers;
pub mod string;
