//! INSERT statement builder.
//!
//! Three entry points share one renderer:
//!
//! - [`build_insert`]: one record, one `VALUES` tuple.
//! - [`build_bulk_insert`]: many records, one tuple per record under a single
//!   `VALUES` clause. The column list comes from the first record only.
//! - [`build_auto`]: dispatches on [`InsertInput`].
//!
//! Each has a `*_json` twin taking a `serde_json::Value`, where the input
//! shape is checked at runtime.
//!
//! # Placeholder numbering
//!
//! In parameterized mode placeholders are numbered across the whole statement.
//! With `C` columns, row `i` (0-based) uses `$(i*C + 1) ..= $(i*C + C)`, and
//! the parameter list is every row's values flattened row by row:
//!
//! ```text
//! INSERT INTO users (name, age) VALUES ($1, $2), ($3, $4);
//! params: ["A", 20, "B", 25]
//! ```

mod statement;
mod trace;


pub use statement::Statement;

use crate::error::{InsertError, InsertResult};
use crate::ident::{IdentRole, validate_columns, validate_identifier};
use crate::options::{InsertOptions, RenderMode};
use crate::record::{InsertInput, Record};
use crate::value::Value;

/// Stand-in for keys missing from later bulk records.
static NULL: Value = Value::Null;

/// Build an INSERT for a single record.
///
/// Columns appear in the record's own order. A record without columns
/// produces `INSERT INTO <table> DEFAULT VALUES;`.
///
/// # Example
/// ```ignore
/// use pginsert::{build_insert, record, InsertOptions};
///
/// let stmt = build_insert(
///     "users",
///     &record! { "name" => "Alice", "age" => 25, "admin" => true },
///     &InsertOptions::new(),
/// )?;
/// assert_eq!(stmt.sql(), "INSERT INTO users (name, age, admin) VALUES ($1, $2, $3);");
/// ```
pub fn build_insert(
    table: &str,
    record: &Record,
    options: &InsertOptions,
) -> InsertResult<Statement> {
    validate_identifier(table, IdentRole::Table)?;
    validate_columns(record.columns())?;
    options.validate()?;

    let columns: Vec<&str> = record.columns().collect();
    let statement = if columns.is_empty() {
        let mut sql = format!("INSERT INTO {table} DEFAULT VALUES");
        options.write_suffix(&mut sql);
        sql.push(';');
        let params = (!options.mode.is_raw()).then(Vec::new);
        Statement::new(sql, params)
    } else {
        let rows = [record.values().collect::<Vec<_>>()];
        render(table, &columns, &rows, options)
    };

    trace::statement_built(table, 1, columns.len(), &statement, options);
    Ok(statement)
}

/// Build one multi-row INSERT for a batch of records.
///
/// The column set is taken from `records[0]`. Later records are looked up by
/// those column names: a missing key renders as `NULL` and keys the first
/// record lacks are ignored, unless [`InsertOptions::strict_shape`] is set, in
/// which case any mismatch is an error.
pub fn build_bulk_insert(
    table: &str,
    records: &[Record],
    options: &InsertOptions,
) -> InsertResult<Statement> {
    validate_identifier(table, IdentRole::Table)?;
    let Some(first) = records.first() else {
        return Err(InsertError::invalid_input(
            "build_bulk_insert expects a non-empty array of records",
        ));
    };
    validate_columns(first.columns())?;
    if first.is_empty() {
        return Err(InsertError::invalid_input(
            "build_bulk_insert: the first record has no columns",
        ));
    }
    options.validate()?;

    let columns: Vec<&str> = first.columns().collect();
    if options.strict_shape {
        check_shape(&columns, records)?;
    } else {
        trace::shape_drift(&columns, records);
    }

    let rows: Vec<Vec<&Value>> = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|&column| record.get(column).unwrap_or(&NULL))
                .collect()
        })
        .collect();

    let statement = render(table, &columns, &rows, options);
    trace::statement_built(table, rows.len(), columns.len(), &statement, options);
    Ok(statement)
}

/// Build an INSERT for either a single record or a batch.
///
/// ```ignore
/// let one = build_auto("users", &user, &opts)?;
/// let many = build_auto("users", &users, &opts)?;
/// ```
pub fn build_auto<'a>(
    table: &str,
    data: impl Into<InsertInput<'a>>,
    options: &InsertOptions,
) -> InsertResult<Statement> {
    match data.into() {
        InsertInput::One(record) => build_insert(table, record, options),
        InsertInput::Many(records) => build_bulk_insert(table, records, options),
    }
}

/// [`build_insert`] for a JSON object.
///
/// The table name is checked before the input shape.
pub fn build_insert_json(
    table: &str,
    data: &serde_json::Value,
    options: &InsertOptions,
) -> InsertResult<Statement> {
    validate_identifier(table, IdentRole::Table)?;
    let record = Record::from_json(data)
        .map_err(|_| InsertError::invalid_input("build_insert expects a single object"))?;
    build_insert(table, &record, options)
}

/// [`build_bulk_insert`] for a JSON array of objects.
pub fn build_bulk_insert_json(
    table: &str,
    data: &serde_json::Value,
    options: &InsertOptions,
) -> InsertResult<Statement> {
    validate_identifier(table, IdentRole::Table)?;
    let items = match data {
        serde_json::Value::Array(items) if !items.is_empty() => items,
        _ => {
            return Err(InsertError::invalid_input(
                "build_bulk_insert expects a non-empty array of objects",
            ));
        }
    };
    let records = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Record::from_json(item).map_err(|_| {
                InsertError::invalid_input(format!(
                    "build_bulk_insert: element {index} is not an object"
                ))
            })
        })
        .collect::<InsertResult<Vec<_>>>()?;
    build_bulk_insert(table, &records, options)
}

/// [`build_auto`] for JSON: arrays go to the bulk builder, anything else to
/// the single-record builder.
pub fn build_auto_json(
    table: &str,
    data: &serde_json::Value,
    options: &InsertOptions,
) -> InsertResult<Statement> {
    if data.is_array() {
        build_bulk_insert_json(table, data, options)
    } else {
        build_insert_json(table, data, options)
    }
}

fn check_shape(columns: &[&str], records: &[Record]) -> InsertResult<()> {
    for (index, record) in records.iter().enumerate().skip(1) {
        let same = record.len() == columns.len() && columns.iter().all(|&c| record.contains(c));
        if !same {
            return Err(InsertError::invalid_input(format!(
                "build_bulk_insert: record {index} does not have the columns of record 0 ({})",
                columns.join(", ")
            )));
        }
    }
    Ok(())
}

/// 1-based placeholder index of `column` in `row`.
fn placeholder_index(row: usize, column: usize, column_count: usize) -> usize {
    row * column_count + column + 1
}

/// Render `INSERT INTO ... VALUES ...;` for pre-validated identifiers.
///
/// Every row in `rows` is aligned with `columns`.
fn render(
    table: &str,
    columns: &[&str],
    rows: &[Vec<&Value>],
    options: &InsertOptions,
) -> Statement {
    let column_list = columns.join(", ");
    // Rough pre-size: each value is a few bytes plus ", ".
    let mut sql = String::with_capacity(
        32 + table.len() + column_list.len() + rows.len() * columns.len() * 6,
    );
    sql.push_str("INSERT INTO ");
    sql.push_str(table);
    sql.push_str(" (");
    sql.push_str(&column_list);
    sql.push_str(") VALUES ");

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push('(');
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                sql.push_str(", ");
            }
            match options.mode {
                RenderMode::Raw => value.write_sql_literal(&mut sql),
                RenderMode::Parameterized => {
                    sql.push('$');
                    sql.push_str(&placeholder_index(i, j, columns.len()).to_string());
                }
            }
        }
        sql.push(')');
    }

    options.write_suffix(&mut sql);
    sql.push(';');

    let params = match options.mode {
        RenderMode::Raw => None,
        RenderMode::Parameterized => Some(rows.iter().flatten().map(|&v| v.clone()).collect()),
    };
    Statement::new(sql, params)
}
