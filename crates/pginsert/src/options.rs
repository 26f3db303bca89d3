//! Statement rendering options.

use crate::error::InsertResult;
use crate::ident::validate_columns;

/// How values appear in the generated SQL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Inline every value as an escaped literal. No parameters are returned.
    Raw,
    /// Emit `$1, $2, ...` placeholders and return the values separately.
    #[default]
    Parameterized,
}

impl RenderMode {
    pub fn is_raw(&self) -> bool {
        matches!(self, RenderMode::Raw)
    }
}

/// Options for building INSERT statements.
///
/// The default renders parameterized SQL, tolerates bulk records that differ
/// from the first one, and adds no extra clauses.
///
/// # Example
/// ```ignore
/// use pginsert::InsertOptions;
///
/// let opts = InsertOptions::new()
///     .raw()
///     .returning(["id"])
///     .on_conflict_do_nothing();
/// ```
#[derive(Debug, Clone)]
pub struct InsertOptions {
    /// Raw literals or placeholders. Default: [`RenderMode::Parameterized`].
    pub mode: RenderMode,
    /// Require every bulk record to have exactly the columns of the first one.
    pub strict_shape: bool,
    /// Columns for a trailing `RETURNING` clause. Empty means no clause.
    pub returning: Vec<String>,
    /// Append `ON CONFLICT DO NOTHING`.
    pub on_conflict_do_nothing: bool,
    /// Truncate logged SQL (in bytes, at a char boundary). `None` logs it whole.
    pub max_logged_sql_length: Option<usize>,
}

impl Default for InsertOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            strict_shape: false,
            returning: Vec::new(),
            on_conflict_do_nothing: false,
            max_logged_sql_length: Some(200),
        }
    }
}

impl InsertOptions {
    /// Create options with defaults (parameterized, lenient bulk shape).
    pub fn new() -> Self {
        Self::default()
    }

    /// Render inline literals.
    pub fn raw(mut self) -> Self {
        self.mode = RenderMode::Raw;
        self
    }

    /// Render placeholders plus a parameter list.
    pub fn parameterized(mut self) -> Self {
        self.mode = RenderMode::Parameterized;
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Fail bulk builds whose later records don't match the first record's columns.
    pub fn strict_shape(mut self) -> Self {
        self.strict_shape = true;
        self
    }

    /// Set `RETURNING` columns. Names are validated when the statement is built.
    pub fn returning<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.returning = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn on_conflict_do_nothing(mut self) -> Self {
        self.on_conflict_do_nothing = true;
        self
    }

    pub fn max_logged_sql_length(mut self, len: usize) -> Self {
        self.max_logged_sql_length = Some(len);
        self
    }

    /// Log statements untruncated.
    pub fn no_log_truncate(mut self) -> Self {
        self.max_logged_sql_length = None;
        self
    }

    pub(crate) fn validate(&self) -> InsertResult<()> {
        validate_columns(self.returning.iter().map(String::as_str))
    }

    /// Write the optional trailing clauses (without the terminating `;`).
    pub(crate) fn write_suffix(&self, out: &mut String) {
        if self.on_conflict_do_nothing {
            out.push_str(" ON CONFLICT DO NOTHING");
        }
        if !self.returning.is_empty() {
            out.push_str(" RETURNING ");
            out.push_str(&self.returning.join(", "));
        }
    }
}

impl From<RenderMode> for InsertOptions {
    fn from(mode: RenderMode) -> Self {
        Self::new().with_mode(mode)
    }
}
