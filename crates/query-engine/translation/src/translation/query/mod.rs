//! Translate a filter query into select, update and delete statements.

pub mod conditions;
pub mod filtering;
pub mod pattern;
pub mod sorting;
pub mod values;

use filter_models::Query;
use query_engine_sql::sql;

use crate::translation::error::{Error, Mutation};

/// Add the filter, ordering and pagination of a query to a SELECT.
///
/// Selecting without a query, or with a query that filters nothing, is allowed.
/// ORDER BY elements are appended after the ones already on the statement. On
/// error the statement is left unchanged.
pub fn translate_select(
    select: &mut sql::ast::Select,
    query: Option<&Query>,
) -> Result<(), Error> {
    let Some(query) = query else {
        return Ok(());
    };

    let predicate = filtering::translate_expression(&query.expr)?;
    let order_by = sorting::translate_order_by(&query.order);

    if query.offset > 0 {
        select.limit.offset = Some(query.offset);
    }
    if query.limit > 0 {
        select.limit.limit = Some(query.limit);
    }
    if let Some(predicate) = predicate {
        add_predicate(&mut select.where_, predicate);
    }
    select.order_by.elements.extend(order_by);

    tracing::debug!("translated select: {:?}", select);
    Ok(())
}

/// Add the filter of a query to an UPDATE. The update must assign at least one
/// column and the query must contain a condition. On error the statement is
/// left unchanged.
pub fn translate_update(
    update: &mut sql::ast::Update,
    query: Option<&Query>,
) -> Result<(), Error> {
    let predicate = translate_mutation_filter(query, Mutation::Update)?;
    if update.set.is_empty() {
        return Err(Error::NoAssignments);
    }
    add_predicate(&mut update.where_, predicate);

    tracing::debug!("translated update: {:?}", update);
    Ok(())
}

/// Add the filter of a query to a DELETE. The query must contain a condition.
/// On error the statement is left unchanged.
pub fn translate_delete(
    delete: &mut sql::ast::Delete,
    query: Option<&Query>,
) -> Result<(), Error> {
    let predicate = translate_mutation_filter(query, Mutation::Delete)?;
    add_predicate(&mut delete.where_, predicate);

    tracing::debug!("translated delete: {:?}", delete);
    Ok(())
}

fn add_predicate(where_: &mut sql::ast::Where, predicate: sql::ast::Expression) {
    let existing = std::mem::replace(where_, sql::ast::Where(sql::helpers::empty_where()));
    *where_ = sql::helpers::and_where(existing, predicate);
}

/// The predicate of an update or delete. Fails unless the tree has a leaf condition.
fn translate_mutation_filter(
    query: Option<&Query>,
    mutation: Mutation,
) -> Result<sql::ast::Expression, Error> {
    match query {
        Some(query) if conditions::has_conditions(&query.expr) => {
            filtering::translate_expression(&query.expr)?
                .ok_or(Error::UnconditionedMutation(mutation))
        }
        _ => Err(Error::UnconditionedMutation(mutation)),
    }
}
