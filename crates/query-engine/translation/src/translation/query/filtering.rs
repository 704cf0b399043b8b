//! Handle filtering/where clauses translation.

use enum_iterator::Sequence;

use filter_models::{Expression, Operator};
use query_engine_sql::sql;
use query_engine_sql::sql::ast::BinaryOperator;

use super::pattern::PatternAnchor;
use super::values;
use crate::translation::error::Error;
use crate::translation::helpers;

/// The comparison operators of the filter model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum Comparison {
    Equal,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl Comparison {
    /// The SQL operator of this comparison, and the complement it is rewritten to
    /// when the node is negated. Negated comparisons are never wrapped in NOT.
    pub fn lowering(self) -> (BinaryOperator, BinaryOperator) {
        match self {
            Comparison::Equal => (BinaryOperator::Equals, BinaryOperator::NotEquals),
            Comparison::GreaterThan => (
                BinaryOperator::GreaterThan,
                BinaryOperator::LessThanOrEqualTo,
            ),
            Comparison::GreaterThanOrEqual => (
                BinaryOperator::GreaterThanOrEqualTo,
                BinaryOperator::LessThan,
            ),
            Comparison::LessThan => (
                BinaryOperator::LessThan,
                BinaryOperator::GreaterThanOrEqualTo,
            ),
            Comparison::LessThanOrEqual => (
                BinaryOperator::LessThanOrEqualTo,
                BinaryOperator::GreaterThan,
            ),
        }
    }
}

/// Translate a filter tree into a boolean expression.
///
/// Returns `None` when the tree does not filter anything: a no-op node, or a
/// group whose operands all translate to `None`. Leaf conditions must name a
/// field.
pub fn translate_expression(
    expression: &Expression,
) -> Result<Option<sql::ast::Expression>, Error> {
    require_field(expression)?;

    match &expression.op {
        Operator::Noop => Ok(None),
        Operator::And | Operator::Or => translate_logical(expression),
        Operator::Equal => translate_comparison(expression, Comparison::Equal).map(Some),
        Operator::GreaterThan => {
            translate_comparison(expression, Comparison::GreaterThan).map(Some)
        }
        Operator::GreaterThanOrEqual => {
            translate_comparison(expression, Comparison::GreaterThanOrEqual).map(Some)
        }
        Operator::LessThan => translate_comparison(expression, Comparison::LessThan).map(Some),
        Operator::LessThanOrEqual => {
            translate_comparison(expression, Comparison::LessThanOrEqual).map(Some)
        }
        Operator::In => translate_membership(expression).map(Some),
        Operator::Has => {
            translate_array_operation(expression, BinaryOperator::ArrayContains).map(Some)
        }
        Operator::HasAny => {
            translate_array_operation(expression, BinaryOperator::ArrayOverlaps).map(Some)
        }
        Operator::Prefix => translate_pattern(expression, PatternAnchor::Prefix).map(Some),
        Operator::Suffix => translate_pattern(expression, PatternAnchor::Suffix).map(Some),
        Operator::Contains => translate_pattern(expression, PatternAnchor::Contains).map(Some),
        Operator::Other(tag) => Err(Error::UnknownOperator(tag.clone())),
    }
}

/// AND/OR over the operands that translate to something. A negated group is
/// wrapped in NOT as a whole.
fn translate_logical(expression: &Expression) -> Result<Option<sql::ast::Expression>, Error> {
    let operands = expression
        .operands
        .iter()
        .filter_map(|operand| translate_expression(operand).transpose())
        .collect::<Result<Vec<_>, Error>>()?;

    if operands.is_empty() {
        return Ok(None);
    }

    let combined = match expression.op {
        Operator::And => sql::ast::Expression::And(operands),
        _ => sql::ast::Expression::Or(operands),
    };

    if expression.not {
        Ok(Some(sql::ast::Expression::Not(Box::new(combined))))
    } else {
        Ok(Some(combined))
    }
}

fn translate_comparison(
    expression: &Expression,
    comparison: Comparison,
) -> Result<sql::ast::Expression, Error> {
    if !values::is_comparable_scalar(&expression.value) {
        return Err(Error::NonComparableValue {
            field: expression.field.clone(),
            kind: expression.value.kind(),
        });
    }

    let (operator, complement) = comparison.lowering();
    let operator = if expression.not { complement } else { operator };

    Ok(field_operation(
        &expression.field,
        operator,
        values::translate_value(&expression.value),
    ))
}

/// IN is equality against the whole list, bound as a single array parameter.
/// Negated, it becomes `<>`.
fn translate_membership(expression: &Expression) -> Result<sql::ast::Expression, Error> {
    require_list(expression)?;

    let operator = if expression.not {
        BinaryOperator::NotEquals
    } else {
        BinaryOperator::Equals
    };

    Ok(field_operation(
        &expression.field,
        operator,
        values::translate_value(&expression.value),
    ))
}

/// `@>` and `&&` have no complement operator, so negation wraps them in NOT.
fn translate_array_operation(
    expression: &Expression,
    operator: BinaryOperator,
) -> Result<sql::ast::Expression, Error> {
    require_list(expression)?;

    let operation = field_operation(
        &expression.field,
        operator,
        values::translate_value(&expression.value),
    );

    if expression.not {
        Ok(sql::ast::Expression::Not(Box::new(operation)))
    } else {
        Ok(operation)
    }
}

fn translate_pattern(
    expression: &Expression,
    anchor: PatternAnchor,
) -> Result<sql::ast::Expression, Error> {
    let Some(value) = expression.value.as_str() else {
        return Err(Error::NonStringValue {
            operator: expression.op.clone(),
            field: expression.field.clone(),
        });
    };

    let operator = if expression.not {
        BinaryOperator::NotLike
    } else {
        BinaryOperator::Like
    };

    Ok(field_operation(
        &expression.field,
        operator,
        sql::ast::Value::String(anchor.pattern(value)),
    ))
}

fn require_field(expression: &Expression) -> Result<(), Error> {
    let is_leaf = !(expression.op == Operator::Noop
        || expression.op.is_logical()
        || matches!(expression.op, Operator::Other(_)));
    if is_leaf && expression.field.is_empty() {
        Err(Error::MissingField {
            operator: expression.op.clone(),
        })
    } else {
        Ok(())
    }
}

fn require_list(expression: &Expression) -> Result<(), Error> {
    if values::is_list_value(&expression.value) {
        Ok(())
    } else {
        Err(Error::NonListValue {
            operator: expression.op.clone(),
            field: expression.field.clone(),
        })
    }
}

/// `field <operator> $n`. (In)equality against null becomes `IS [NOT] NULL`.
fn field_operation(
    field: &str,
    operator: BinaryOperator,
    value: sql::ast::Value,
) -> sql::ast::Expression {
    let left = Box::new(helpers::column(field));
    match (operator, &value) {
        (BinaryOperator::Equals, sql::ast::Value::Null) => sql::ast::Expression::UnaryOperation {
            expression: left,
            operator: sql::ast::UnaryOperator::IsNull,
        },
        (BinaryOperator::NotEquals, sql::ast::Value::Null) => {
            sql::ast::Expression::UnaryOperation {
                expression: left,
                operator: sql::ast::UnaryOperator::IsNotNull,
            }
        }
        _ => sql::ast::Expression::BinaryOperation {
            left,
            operator,
            right: Box::new(sql::ast::Expression::Value(value)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_models::{Value, ValueKind};
    use query_engine_sql::sql::convert::expression_to_sql;
    use query_engine_sql::sql::string::SQL;

    fn render(expression: &Expression) -> SQL {
        let translated = translate_expression(expression)
            .expect("translation failed")
            .expect("expected a predicate");
        expression_to_sql(&translated)
    }

    #[test]
    fn comparison_lowering_table() {
        let table: Vec<_> = enum_iterator::all::<Comparison>()
            .map(Comparison::lowering)
            .collect();
        assert_eq!(
            table,
            vec![
                (BinaryOperator::Equals, BinaryOperator::NotEquals),
                (
                    BinaryOperator::GreaterThan,
                    BinaryOperator::LessThanOrEqualTo
                ),
                (
                    BinaryOperator::GreaterThanOrEqualTo,
                    BinaryOperator::LessThan
                ),
                (
                    BinaryOperator::LessThan,
                    BinaryOperator::GreaterThanOrEqualTo
                ),
                (
                    BinaryOperator::LessThanOrEqualTo,
                    BinaryOperator::GreaterThan
                ),
            ]
        );
    }

    #[test]
    fn ordered_complements_are_mutual() {
        let ordered: Vec<_> = enum_iterator::all::<Comparison>()
            .filter(|c| *c != Comparison::Equal)
            .map(Comparison::lowering)
            .collect();
        for (operator, complement) in &ordered {
            assert!(ordered.contains(&(*complement, *operator)));
        }
    }

    #[test]
    fn noop_translates_to_nothing() {
        assert_eq!(translate_expression(&Expression::noop()), Ok(None));
    }

    #[test]
    fn groups_of_nothing_translate_to_nothing() {
        let expr = Expression::and(vec![
            Expression::noop(),
            Expression::or(vec![Expression::and(vec![]), Expression::noop()]),
        ])
        .negate();
        assert_eq!(translate_expression(&expr), Ok(None));
    }

    #[test]
    fn nothing_operands_are_dropped() {
        let expr = Expression::or(vec![
            Expression::noop(),
            Expression::equal("a", 1),
            Expression::and(vec![]),
        ]);
        assert_eq!(render(&expr).sql, "(a = $1)");
    }

    #[test]
    fn negated_comparisons_flip_the_operator() {
        let cases = [
            (Expression::equal("x", 1), "x <> $1"),
            (Expression::greater_than("x", 1), "x <= $1"),
            (Expression::greater_or_equal("x", 1), "x < $1"),
            (Expression::less_than("x", 1), "x >= $1"),
            (Expression::less_or_equal("x", 1), "x > $1"),
        ];
        for (expr, expected) in cases {
            let sql = render(&expr.negate());
            assert_eq!(sql.sql, expected);
            assert!(!sql.sql.contains("NOT"));
        }
    }

    #[test]
    fn positive_comparisons() {
        assert_eq!(render(&Expression::equal("x", "a")).sql, "x = $1");
        assert_eq!(render(&Expression::greater_than("x", 1.5)).sql, "x > $1");
        assert_eq!(render(&Expression::less_or_equal("x", 2)).sql, "x <= $1");
    }

    #[test]
    fn equality_with_null_is_is_null() {
        assert_eq!(
            render(&Expression::equal("deleted_at", Value::Null)).sql,
            "deleted_at IS NULL"
        );
        let negated = render(&Expression::equal("deleted_at", Value::Null).negate());
        assert_eq!(negated.sql, "deleted_at IS NOT NULL");
        assert!(negated.params.is_empty());
    }

    // Negating an ordered comparison against null is lowered like any other
    // value: NOT (x > NULL) becomes x <= NULL, which matches no rows.
    #[test]
    fn negated_ordered_comparison_with_null_keeps_the_complement() {
        let sql = render(&Expression::greater_than("x", Value::Null).negate());
        assert_eq!(sql.sql, "x <= $1");
        assert_eq!(sql.params, vec![sql::ast::Value::Null]);
    }

    #[test]
    fn negated_group_wraps_the_rendered_group() {
        let group = Expression::or(vec![
            Expression::equal("a", 1),
            Expression::has("tags", vec!["x"]),
        ]);
        let plain = render(&group);
        let negated = render(&group.clone().negate());
        assert_eq!(plain.sql, "(a = $1 OR tags @> $2)");
        assert_eq!(negated.sql, format!("NOT ({})", plain.sql));
        assert_eq!(negated.params, plain.params);
    }

    #[test]
    fn comparisons_reject_collections() {
        let err = translate_expression(&Expression::equal("x", vec![1, 2])).unwrap_err();
        assert_eq!(
            err,
            Error::NonComparableValue {
                field: "x".to_string(),
                kind: ValueKind::List,
            }
        );
        assert_eq!(
            err.to_string(),
            "value for field x is not comparable (kind: list)"
        );
    }

    #[test]
    fn membership_is_list_equality() {
        let sql = render(&Expression::one_of("tags", vec!["a", "b"]));
        assert_eq!(sql.sql, "tags = $1");
        let negated = render(&Expression::one_of("tags", vec!["a", "b"]).negate());
        assert_eq!(negated.sql, "tags <> $1");
        assert_eq!(
            negated.params,
            vec![sql::ast::Value::Array(vec![
                sql::ast::Value::String("a".to_string()),
                sql::ast::Value::String("b".to_string()),
            ])]
        );
    }

    #[test]
    fn membership_requires_a_list() {
        let err = translate_expression(&Expression::one_of("tags", "a")).unwrap_err();
        assert_eq!(err.to_string(), "value for IN must be a list (field: tags)");
    }

    #[test]
    fn array_operators() {
        assert_eq!(render(&Expression::has("tags", vec!["a"])).sql, "tags @> $1");
        assert_eq!(render(&Expression::has_any("tags", vec!["a"])).sql, "tags && $1");
        assert_eq!(
            render(&Expression::has("tags", vec!["a"]).negate()).sql,
            "NOT (tags @> $1)"
        );
        assert_eq!(
            render(&Expression::has_any("tags", vec!["a"]).negate()).sql,
            "NOT (tags && $1)"
        );
    }

    #[test]
    fn array_operators_require_a_list() {
        let err = translate_expression(&Expression::has_any("tags", Value::Null)).unwrap_err();
        assert_eq!(
            err,
            Error::NonListValue {
                operator: Operator::HasAny,
                field: "tags".to_string(),
            }
        );
    }

    #[test]
    fn patterns_are_escaped_and_anchored() {
        let sql = render(&Expression::prefix("code", "100%_off"));
        assert_eq!(sql.sql, "code LIKE $1");
        assert_eq!(
            sql.params,
            vec![sql::ast::Value::String("100\\%\\_off%".to_string())]
        );

        let sql = render(&Expression::contains("name", "bob").negate());
        assert_eq!(sql.sql, "name NOT LIKE $1");
        assert_eq!(sql.params, vec![sql::ast::Value::String("%bob%".to_string())]);

        let sql = render(&Expression::suffix("email", "@example.com"));
        assert_eq!(
            sql.params,
            vec![sql::ast::Value::String("%@example.com".to_string())]
        );
    }

    #[test]
    fn patterns_require_a_string() {
        let expr = Expression::leaf(Operator::Prefix, "code", 100);
        let err = translate_expression(&expr).unwrap_err();
        assert_eq!(err.to_string(), "value for PREFIX must be a string (field: code)");
    }

    #[test]
    fn leaves_without_a_field_are_rejected() {
        for expr in [
            Expression::equal("", 1),
            Expression::less_than("", 1).negate(),
            Expression::one_of("", vec![1, 2]),
            Expression::has_any("", vec!["a"]),
            Expression::prefix("", "a"),
        ] {
            assert_eq!(
                translate_expression(&expr),
                Err(Error::MissingField {
                    operator: expr.op.clone()
                })
            );
        }
    }

    #[test]
    fn nested_leaf_without_a_field_fails_the_group() {
        let expr = Expression::or(vec![
            Expression::equal("id", 1),
            Expression::and(vec![Expression::contains("", "x")]),
        ]);
        let err = translate_expression(&expr).unwrap_err();
        assert_eq!(err.to_string(), "CONTAINS condition without a field");
    }

    #[test]
    fn groups_do_not_need_a_field() {
        let sql = render(&Expression::and(vec![Expression::equal("id", 1)]));
        assert_eq!(sql.sql, "(id = $1)");
        assert_eq!(translate_expression(&Expression::noop()), Ok(None));
    }

    #[test]
    fn unknown_operators_are_reported() {
        let expr = Expression::and(vec![
            Expression::equal("a", 1),
            Expression::leaf(Operator::Other("REGEX".to_string()), "name", "^a"),
        ]);
        assert_eq!(
            translate_expression(&expr),
            Err(Error::UnknownOperator("REGEX".to_string()))
        );
    }
}
