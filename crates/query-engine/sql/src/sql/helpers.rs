//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Expression {
    true_expr()
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// Empty `LIMIT` and `OFFSET` clauses.
pub fn empty_limit() -> Limit {
    Limit {
        limit: None,
        offset: None,
    }
}

/// A `true` expression.
pub fn true_expr() -> Expression {
    Expression::Value(Value::Bool(true))
}

/// Add a predicate to a `WHERE` clause, AND-ing it with whatever is already there.
pub fn and_where(where_: Where, predicate: Expression) -> Where {
    let Where(existing) = where_;
    if existing == true_expr() {
        Where(predicate)
    } else {
        Where(Expression::And(vec![existing, predicate]))
    }
}

// Names //

/// A reference to a table, qualified by a schema when one is given.
pub fn table(schema: Option<&str>, name: &str) -> TableReference {
    TableReference {
        schema: schema.map(|schema| SchemaName(schema.to_string())),
        name: TableName(name.to_string()),
    }
}

// Statements //

/// Build a simple select * with the rest empty.
pub fn star_select(from: TableReference) -> Select {
    Select {
        select_list: SelectList::SelectStar,
        from: Some(from),
        where_: Where(empty_where()),
        order_by: empty_order_by(),
        limit: empty_limit(),
    }
}

/// Build an update of the given columns with no condition.
///
/// An update without columns does not render to valid SQL.
pub fn simple_update(table: TableReference, set: Vec<(ColumnName, Expression)>) -> Update {
    Update {
        table,
        set,
        where_: Where(empty_where()),
    }
}

/// Build a delete with no condition.
pub fn simple_delete(from: TableReference) -> Delete {
    Delete {
        from,
        where_: Where(empty_where()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_where_replaces_the_empty_clause() {
        let predicate = Expression::ColumnReference(ColumnName("active".to_string()));
        assert_eq!(
            and_where(Where(empty_where()), predicate.clone()),
            Where(predicate)
        );
    }

    #[test]
    fn and_where_conjoins_existing_predicates() {
        let first = Expression::ColumnReference(ColumnName("a".to_string()));
        let second = Expression::ColumnReference(ColumnName("b".to_string()));
        assert_eq!(
            and_where(Where(first.clone()), second.clone()),
            Where(Expression::And(vec![first, second]))
        );
    }
}
