use std::fs;
use std::path::PathBuf;

use filter_models::Query;
use query_engine_sql::sql;
use query_engine_translation::translation;

/// Read the query of a golden test from `tests/goldenfiles/<testname>/request.json`.
pub fn read_query(testname: &str) -> Query {
    let path = PathBuf::from("tests/goldenfiles")
        .join(testname)
        .join("request.json");
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn users() -> sql::ast::TableReference {
    sql::helpers::table(Some("public"), "users")
}

/// Translate the golden query into `SELECT * FROM "public"."users"` and render it.
pub fn test_select(testname: &str) -> Result<sql::string::SQL, translation::error::Error> {
    let query = read_query(testname);
    let mut select = sql::helpers::star_select(users());
    translation::query::translate_select(&mut select, Some(&query))?;
    Ok(sql::convert::select_to_sql(&select))
}

/// Translate the golden query into an update setting `status` to `'archived'` and render it.
pub fn test_update(testname: &str) -> Result<sql::string::SQL, translation::error::Error> {
    let query = read_query(testname);
    let mut update = sql::helpers::simple_update(
        users(),
        vec![(
            sql::ast::ColumnName("status".to_string()),
            sql::ast::Expression::Value(sql::ast::Value::String("archived".to_string())),
        )],
    );
    translation::query::translate_update(&mut update, Some(&query))?;
    Ok(sql::convert::update_to_sql(&update))
}

/// Translate the golden query into a delete from `"public"."users"` and render it.
pub fn test_delete(testname: &str) -> Result<sql::string::SQL, translation::error::Error> {
    let query = read_query(testname);
    let mut delete = sql::helpers::simple_delete(users());
    translation::query::translate_delete(&mut delete, Some(&query))?;
    Ok(sql::convert::delete_to_sql(&delete))
}
