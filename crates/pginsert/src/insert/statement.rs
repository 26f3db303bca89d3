use crate::value::Value;
use serde::Serialize;
use std::fmt;
use tokio_postgres::types::ToSql;

/// A generated INSERT statement.
///
/// In parameterized mode `params` holds one value per `$n` placeholder, in
/// placeholder order. In raw mode every value is already inlined in the SQL and
/// `params` is `None`.
///
/// Serializes as `{"sql": "...", "params": [...]}`, omitting `params` in raw
/// mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct Statement {
    sql: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Vec<Value>>,
}

impl Statement {
    pub(crate) fn new(sql: String, params: Option<Vec<Value>>) -> Self {
        Self { sql, params }
    }

    /// The SQL text, terminated by `;`.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound values, or `None` for a raw statement.
    pub fn params(&self) -> Option<&[Value]> {
        self.params.as_deref()
    }

    /// Whether values were inlined as literals.
    pub fn is_raw(&self) -> bool {
        self.params.is_none()
    }

    pub fn param_count(&self) -> usize {
        self.params.as_ref().map_or(0, Vec::len)
    }

    /// Parameter refs compatible with `tokio-postgres`.
    ///
    /// ```ignore
    /// let stmt = pginsert::build_insert("users", &user, &InsertOptions::new())?;
    /// client.execute(stmt.sql(), &stmt.params_ref()).await?;
    /// ```
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .flatten()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect()
    }

    pub fn into_parts(self) -> (String, Option<Vec<Value>>) {
        (self.sql, self.params)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
