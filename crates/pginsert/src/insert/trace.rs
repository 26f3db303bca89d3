//! Debug logging for built statements (`tracing` feature).

use std::borrow::Cow;

use super::Statement;
use crate::options::InsertOptions;
use crate::record::Record;

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

/// The SQL text as it appears in the log: cut to `max` bytes with `...`
/// appended, or whole when `max` is `None`.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn logged_sql(sql: &str, max: Option<usize>) -> Cow<'_, str> {
    match max {
        Some(max) if sql.len() > max => Cow::Owned(format!("{}...", truncate_sql_bytes(sql, max))),
        _ => Cow::Borrowed(sql),
    }
}

#[cfg(feature = "tracing")]
pub(super) fn statement_built(
    table: &str,
    rows: usize,
    columns: usize,
    statement: &Statement,
    options: &InsertOptions,
) {
    let sql = logged_sql(statement.sql(), options.max_logged_sql_length);
    tracing::debug!(
        target: "pginsert::sql",
        table,
        mode = ?options.mode,
        rows,
        columns,
        param_count = statement.param_count(),
        sql = %sql,
        "built INSERT statement"
    );
}

#[cfg(not(feature = "tracing"))]
pub(super) fn statement_built(
    _table: &str,
    _rows: usize,
    _columns: usize,
    _statement: &Statement,
    _options: &InsertOptions,
) {
}

/// Report later bulk records whose keys differ from record 0.
#[cfg(feature = "tracing")]
pub(super) fn shape_drift(columns: &[&str], records: &[Record]) {
    if !tracing::enabled!(target: "pginsert::insert", tracing::Level::DEBUG) {
        return;
    }
    for (index, record) in records.iter().enumerate().skip(1) {
        let missing = columns.iter().filter(|&&c| !record.contains(c)).count();
        let extra = record.columns().filter(|c| !columns.contains(c)).count();
        if missing > 0 || extra > 0 {
            tracing::debug!(
                target: "pginsert::insert",
                index,
                missing,
                extra,
                "bulk record differs from record 0: missing columns insert NULL, extra keys are ignored"
            );
        }
    }
}

#[cfg(not(feature = "tracing"))]
pub(super) fn shape_drift(_columns: &[&str], _records: &[Record]) {}
