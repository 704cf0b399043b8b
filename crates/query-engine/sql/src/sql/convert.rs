//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::helpers;
use super::string::SQL;

/// Render a SELECT statement.
pub fn select_to_sql(select: &Select) -> SQL {
    let mut sql = SQL::new();
    select.to_sql(&mut sql);
    sql
}

/// Render an UPDATE statement.
pub fn update_to_sql(update: &Update) -> SQL {
    let mut sql = SQL::new();
    update.to_sql(&mut sql);
    sql
}

/// Render a DELETE statement.
pub fn delete_to_sql(delete: &Delete) -> SQL {
    let mut sql = SQL::new();
    delete.to_sql(&mut sql);
    sql
}

/// Render a standalone predicate, e.g. to embed it elsewhere.
pub fn expression_to_sql(expression: &Expression) -> SQL {
    let mut sql = SQL::new();
    expression.to_sql(&mut sql);
    sql
}

// Convert to SQL strings

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");

        self.select_list.to_sql(sql);

        if let Some(from) = &self.from {
            sql.append_syntax(" FROM ");
            from.to_sql(sql);
        }

        self.where_.to_sql(sql);

        self.order_by.to_sql(sql);

        self.limit.to_sql(sql);
    }
}

impl Update {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("UPDATE ");
        self.table.to_sql(sql);
        sql.append_syntax(" SET ");
        for (index, (column, value)) in self.set.iter().enumerate() {
            column.to_sql(sql);
            sql.append_syntax(" = ");
            value.to_sql(sql);
            if index < (self.set.len() - 1) {
                sql.append_syntax(", ");
            }
        }

        self.where_.to_sql(sql);
    }
}

impl Delete {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("DELETE FROM ");
        self.from.to_sql(sql);

        self.where_.to_sql(sql);
    }
}

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectList::Columns(columns) => {
                for (index, column) in columns.iter().enumerate() {
                    column.to_sql(sql);
                    if index < (columns.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
            }
            SelectList::SelectStar => {
                sql.append_syntax("*");
            }
        }
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(expression) = self;
        if *expression != helpers::true_expr() {
            sql.append_syntax(" WHERE ");
            expression.to_sql(sql);
        }
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Expression::ColumnReference(column_name) => column_name.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
            Expression::And(operands) => connective(sql, operands, " AND ", "TRUE"),
            Expression::Or(operands) => connective(sql, operands, " OR ", "FALSE"),
            Expression::Not(expr) => {
                sql.append_syntax("NOT (");
                expr.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
            }
            Expression::UnaryOperation {
                expression,
                operator,
            } => {
                expression.to_sql(sql);
                operator.to_sql(sql);
            }
            Expression::FunctionCall { function, args } => {
                function.to_sql(sql);
                sql.append_syntax("(");
                for (index, arg) in args.iter().enumerate() {
                    arg.to_sql(sql);
                    if index < (args.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
                sql.append_syntax(")");
            }
        }
    }
}

/// Parenthesized operands joined by a connective. An empty connective renders as
/// its identity element.
fn connective(sql: &mut SQL, operands: &[Expression], separator: &str, identity: &str) {
    if operands.is_empty() {
        sql.append_syntax(identity);
        return;
    }
    sql.append_syntax("(");
    for (index, operand) in operands.iter().enumerate() {
        operand.to_sql(sql);
        if index < (operands.len() - 1) {
            sql.append_syntax(separator);
        }
    }
    sql.append_syntax(")");
}

impl UnaryOperator {
    pub fn to_sql(self, sql: &mut SQL) {
        match self {
            UnaryOperator::IsNull => sql.append_syntax(" IS NULL"),
            UnaryOperator::IsNotNull => sql.append_syntax(" IS NOT NULL"),
        }
    }
}

impl BinaryOperator {
    pub fn to_sql(self, sql: &mut SQL) {
        match self {
            BinaryOperator::Equals => sql.append_syntax(" = "),
            BinaryOperator::NotEquals => sql.append_syntax(" <> "),
            BinaryOperator::GreaterThan => sql.append_syntax(" > "),
            BinaryOperator::GreaterThanOrEqualTo => sql.append_syntax(" >= "),
            BinaryOperator::LessThan => sql.append_syntax(" < "),
            BinaryOperator::LessThanOrEqualTo => sql.append_syntax(" <= "),
            BinaryOperator::Like => sql.append_syntax(" LIKE "),
            BinaryOperator::NotLike => sql.append_syntax(" NOT LIKE "),
            BinaryOperator::ArrayContains => sql.append_syntax(" @> "),
            BinaryOperator::ArrayOverlaps => sql.append_syntax(" && "),
        }
    }
}

impl Function {
    pub fn to_sql(self, sql: &mut SQL) {
        match self {
            Function::ArrayPosition => sql.append_syntax("array_position"),
            Function::Cardinality => sql.append_syntax("cardinality"),
        }
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_param(self.clone());
    }
}

impl Limit {
    pub fn to_sql(&self, sql: &mut SQL) {
        if let Some(limit) = self.limit {
            sql.append_syntax(" LIMIT ");
            sql.append_syntax(&limit.to_string());
        }
        if let Some(offset) = self.offset {
            sql.append_syntax(" OFFSET ");
            sql.append_syntax(&offset.to_string());
        }
    }
}

// names
impl TableReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        if let Some(SchemaName(schema)) = &self.schema {
            sql.append_identifier(schema);
            sql.append_syntax(".");
        }
        let TableName(name) = &self.name;
        sql.append_identifier(name);
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SQL) {
        let ColumnName(name) = self;
        sql.append_syntax(name);
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" ORDER BY ");
            for (index, order_by_item) in self.elements.iter().enumerate() {
                order_by_item.to_sql(sql);
                if index < (self.elements.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

impl OrderByElement {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.target.to_sql(sql);
        if let Some(direction) = self.direction {
            direction.to_sql(sql);
        }
    }
}

impl OrderByDirection {
    pub fn to_sql(self, sql: &mut SQL) {
        match self {
            OrderByDirection::Asc => sql.append_syntax(" ASC"),
            OrderByDirection::Desc => sql.append_syntax(" DESC"),
        }
    }
}
