//! Type definitions of a SQL AST representation.

use enum_iterator::Sequence;
use serde::Serialize;

/// A SELECT clause
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: Option<TableReference>,
    pub where_: Where,
    pub order_by: OrderBy,
    pub limit: Limit,
}

/// An UPDATE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: TableReference,
    pub set: Vec<(ColumnName, Expression)>,
    pub where_: Where,
}

/// A DELETE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub from: TableReference,
    pub where_: Where,
}

/// A select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectList {
    /// Explicit columns, in output order.
    Columns(Vec<ColumnName>),
    SelectStar,
}

/// A WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Expression);

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub elements: Vec<OrderByElement>,
}

/// A single element in an ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    pub target: Expression,
    /// `None` leaves the direction to the database default.
    pub direction: Option<OrderByDirection>,
}

/// A direction for a single ORDER BY element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

/// LIMIT and OFFSET clauses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// AND clause over any number of operands
    And(Vec<Expression>),
    /// OR clause over any number of operands
    Or(Vec<Expression>),
    /// NOT clause
    Not(Box<Expression>),
    /// A binary operation on two scalar expressions
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    /// An unary operation on a scalar expression
    UnaryOperation {
        expression: Box<Expression>,
        operator: UnaryOperator,
    },
    /// A scalar function call
    FunctionCall {
        function: Function,
        args: Vec<Expression>,
    },
    /// A column reference
    ColumnReference(ColumnName),
    /// A value, always sent as a query parameter
    Value(Value),
}

/// An unary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    IsNull,
    IsNotNull,
}

/// A binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum BinaryOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    Like,
    NotLike,
    /// `@>`: the left array contains every element of the right array
    ArrayContains,
    /// `&&`: the arrays have at least one element in common
    ArrayOverlaps,
}

/// A scalar function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    ArrayPosition,
    Cardinality,
}

/// Value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int8(i64),
    /// An integer above the range of `Int8`, bound as a numeric.
    Numeric(u64),
    Float8(f64),
    String(String),
    Array(Vec<Value>),
    JsonValue(serde_json::Value),
}

/// A database schema name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaName(pub String);

/// A database table name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(pub String);

/// A reference to a table, optionally qualified by its schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableReference {
    pub schema: Option<SchemaName>,
    pub name: TableName,
}

/// A column name or field path. Emitted verbatim, so it must never carry user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(pub String);
