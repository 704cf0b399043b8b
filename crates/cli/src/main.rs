//! Translate filter query documents into SQL from the command line.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use filter_models::{Query, Value};
use query_engine_sql::sql;
use query_engine_translation::translation;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Translate a query document into a SQL statement.
    Translate(TranslateArgs),
    /// Print the JSON Schema of query documents.
    Schema,
}

#[derive(Debug, clap::Args)]
struct TranslateArgs {
    /// The kind of statement to produce.
    #[arg(long, value_enum, default_value_t = Statement::Select)]
    statement: Statement,
    /// The table the statement targets.
    #[arg(long, env = "FILTER_SQL_TABLE")]
    table: String,
    /// The schema of the table.
    #[arg(long, env = "FILTER_SQL_SCHEMA")]
    schema: Option<String>,
    /// Columns to select. All columns when omitted.
    #[arg(long, value_delimiter = ',')]
    columns: Vec<String>,
    /// An update assignment, `column=value`. The value is read as JSON, or as a
    /// plain string when it is not valid JSON.
    #[arg(long = "set", value_parser = parse_assignment)]
    assignments: Vec<(String, Value)>,
    /// The query document: JSON, or YAML for `.yaml`/`.yml` files. `-` reads JSON
    /// from stdin.
    query: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Statement {
    Select,
    Update,
    Delete,
}

/// What `translate` prints.
#[derive(Debug, Serialize)]
struct Output<'a> {
    sql: &'a str,
    params: &'a [sql::ast::Value],
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Translate(args) => {
            let query = read_query(&args.query)?;
            let rendered = translate(&args, &query)?;
            let output = Output {
                sql: &rendered.sql,
                params: &rendered.params,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Schema => {
            let schema = filter_models::query_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }
    Ok(())
}

fn read_query(path: &Path) -> anyhow::Result<Query> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("reading query from stdin")?;
        return serde_json::from_str(&input).context("parsing query from stdin");
    }

    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("yaml" | "yml") => {
            serde_yaml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
        }
        _ => serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display())),
    }
}

/// Build the requested statement for the query and render it.
fn translate(args: &TranslateArgs, query: &Query) -> anyhow::Result<sql::string::SQL> {
    let table = sql::helpers::table(args.schema.as_deref(), &args.table);
    tracing::info!(
        "translating {:?} statement on {}",
        args.statement,
        args.table
    );

    let rendered = match args.statement {
        Statement::Select => {
            let mut select = sql::helpers::star_select(table);
            if !args.columns.is_empty() {
                select.select_list = sql::ast::SelectList::Columns(
                    args.columns
                        .iter()
                        .map(|column| sql::ast::ColumnName(column.clone()))
                        .collect(),
                );
            }
            translation::query::translate_select(&mut select, Some(query))
                .context("translating select")?;
            sql::convert::select_to_sql(&select)
        }
        Statement::Update => {
            let set = args
                .assignments
                .iter()
                .map(|(column, value)| {
                    (
                        sql::ast::ColumnName(column.clone()),
                        sql::ast::Expression::Value(translation::query::values::translate_value(
                            value,
                        )),
                    )
                })
                .collect();
            let mut update = sql::helpers::simple_update(table, set);
            translation::query::translate_update(&mut update, Some(query))
                .context("translating update")?;
            sql::convert::update_to_sql(&update)
        }
        Statement::Delete => {
            let mut delete = sql::helpers::simple_delete(table);
            translation::query::translate_delete(&mut delete, Some(query))
                .context("translating delete")?;
            sql::convert::delete_to_sql(&delete)
        }
    };
    Ok(rendered)
}

fn parse_assignment(raw: &str) -> Result<(String, Value), String> {
    let (column, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected column=value, got '{raw}'"))?;
    if column.is_empty() {
        return Err(format!("missing column in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((column.to_string(), value))
}
