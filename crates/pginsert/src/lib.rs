//! # pginsert
//!
//! Turn structured records into Postgres `INSERT` statements.
//!
//! ## Features
//!
//! - **Two render modes**: parameterized (`$1, $2, ...` plus a value list) or
//!   raw (values inlined as escaped literals)
//! - **Bulk inserts**: one multi-row `VALUES` clause with placeholders numbered
//!   across the whole statement
//! - **Strict identifiers**: table and column names must be plain
//!   `[A-Za-z_][A-Za-z0-9_]*`; nothing is ever quoted on your behalf
//! - **Driver-ready**: [`Value`] implements `tokio_postgres::types::ToSql`
//! - **No I/O**: statements are built, never executed
//!
//! ## Example
//!
//! ```ignore
//! use pginsert::prelude::*;
//!
//! let user = record! { "name" => "Alice", "age" => 25, "admin" => true };
//!
//! // Parameterized
//! let stmt = build_insert("users", &user, &InsertOptions::new())?;
//! assert_eq!(stmt.sql(), "INSERT INTO users (name, age, admin) VALUES ($1, $2, $3);");
//! client.execute(stmt.sql(), &stmt.params_ref()).await?;
//!
//! // Raw
//! let stmt = build_insert("users", &record! { "name" => "O'Brien" }, &InsertOptions::new().raw())?;
//! assert_eq!(stmt.sql(), "INSERT INTO users (name) VALUES ('O''Brien');");
//!
//! // Bulk
//! let rows = [
//!     record! { "name" => "A", "age" => 20 },
//!     record! { "name" => "B", "age" => 25 },
//! ];
//! let stmt = build_bulk_insert("users", &rows, &InsertOptions::new())?;
//! assert_eq!(stmt.sql(), "INSERT INTO users (name, age) VALUES ($1, $2), ($3, $4);");
//! ```
//!
//! ## Logging
//!
//! With the default `tracing` feature every built statement is reported as a
//! `DEBUG` event on target `pginsert::sql`.

pub mod error;
pub mod ident;
pub mod insert;
pub mod options;
pub mod prelude;
pub mod record;
pub mod value;

pub use error::{InsertError, InsertResult};
pub use ident::{IdentRole, is_valid_identifier, validate_identifier};
pub use insert::{
    Statement, build_auto, build_auto_json, build_bulk_insert, build_bulk_insert_json,
    build_insert, build_insert_json,
};
pub use options::{InsertOptions, RenderMode};
pub use record::{InsertInput, Record};
pub use value::Value;
