//! SQL identifier validation.
//!
//! Table and column names are written into the statement unquoted, so they
//! must match `[A-Za-z_][A-Za-z0-9_]*` exactly. Anything else (spaces, quotes,
//! dots, a leading digit, non-ASCII letters) is rejected rather than quoted.
//!
//! # Example
//! ```ignore
//! use pginsert::ident::{IdentRole, validate_identifier};
//!
//! validate_identifier("users", IdentRole::Table)?;
//! assert!(validate_identifier("users; drop table users", IdentRole::Table).is_err());
//! # Ok::<(), pginsert::InsertError>(())
//! ```

use crate::error::{InsertError, InsertResult};
use std::fmt;
use std::sync::OnceLock;

/// Where an identifier appears in the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentRole {
    /// The target table of `INSERT INTO`.
    Table,
    /// A column in the column list or `RETURNING` clause.
    Column,
}

impl IdentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentRole::Table => "table",
            IdentRole::Column => "column",
        }
    }
}

impl fmt::Display for IdentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn identifier_re() -> &'static regex::Regex {
    static IDENT_RE: OnceLock<regex::Regex> = OnceLock::new();
    IDENT_RE.get_or_init(|| {
        regex::Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("invalid built-in identifier regex")
    })
}

/// Returns `true` if `name` can appear unquoted as a table or column name.
pub fn is_valid_identifier(name: &str) -> bool {
    identifier_re().is_match(name)
}

/// Validate `name` as an unquoted identifier playing `role`.
///
/// Fails with [`InsertError::InvalidIdentifier`] carrying the offending name
/// and role.
pub fn validate_identifier(name: &str, role: IdentRole) -> InsertResult<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(InsertError::invalid_identifier(name, role))
    }
}

/// Validate every name in `names` as a column, stopping at the first failure.
pub(crate) fn validate_columns<'a>(names: impl IntoIterator<Item = &'a str>) -> InsertResult<()> {
    names
        .into_iter()
        .try_for_each(|name| validate_identifier(name, IdentRole::Column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple() {
        assert!(is_valid_identifier("users"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("created_at"));
        assert!(is_valid_identifier("Table2"));
        assert!(is_valid_identifier("_"));
    }

    #[test]
    fn accepts_reserved_words() {
        // No keyword list: the pattern alone decides.
        assert!(is_valid_identifier("select"));
        assert!(is_valid_identifier("user"));
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn rejects_start_digit() {
        assert!(!is_valid_identifier("123users"));
        assert!(!is_valid_identifier("1"));
    }

    #[test]
    fn rejects_sql_metacharacters() {
        assert!(!is_valid_identifier("users; drop table users; --"));
        assert!(!is_valid_identifier("my table"));
        assert!(!is_valid_identifier("public.users"));
        assert!(!is_valid_identifier(r#""quoted""#));
        assert!(!is_valid_identifier("o'brien"));
        assert!(!is_valid_identifier("my_var$1"));
        assert!(!is_valid_identifier("name-with-dash"));
    }

    #[test]
    fn rejects_trailing_newline() {
        assert!(!is_valid_identifier("users\n"));
        assert!(!is_valid_identifier("\nusers"));
    }

    #[test]
    fn rejects_non_ascii_letters() {
        assert!(!is_valid_identifier("usérs"));
        assert!(!is_valid_identifier("таблица"));
    }

    #[test]
    fn error_carries_name_and_role() {
        let err = validate_identifier("123users", IdentRole::Table).unwrap_err();
        assert_eq!(
            err,
            InsertError::InvalidIdentifier {
                name: "123users".to_string(),
                role: IdentRole::Table,
            }
        );
        assert!(err.to_string().starts_with("table name \"123users\" is invalid"));
    }

    #[test]
    fn validate_columns_stops_at_first_bad_name() {
        let err = validate_columns(["ok", "bad name", "1also_bad"]).unwrap_err();
        assert_eq!(err.ident_role(), Some(IdentRole::Column));
        assert!(matches!(err, InsertError::InvalidIdentifier { ref name, .. } if name == "bad name"));
    }
}
