//! Column values and their SQL renderings.
//!
//! A [`Value`] is rendered one of two ways:
//!
//! - **raw**: [`Value::to_sql_literal`] produces a self-contained Postgres
//!   literal (`NULL`, `TRUE`, `42`, `'O''Brien'`, ...).
//! - **parameterized**: the value is handed to the driver unchanged; it
//!   implements [`ToSql`] so `tokio-postgres` can bind it to a `$n` placeholder.

use bytes::BytesMut;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::error::Error as StdError;
use tokio_postgres::types::{IsNull, ToSql, Type, WrongType, to_sql_checked};

/// A single column value.
///
/// Serialization is decided purely by the variant; values carry no SQL type
/// annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL`. Absent keys in bulk records render the same way.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// A point in time, rendered as ISO-8601 UTC text in raw mode.
    Timestamp(DateTime<Utc>),
    Text(String),
    /// Any other structured value (JSON arrays/objects). Rendered as quoted
    /// JSON text in raw mode.
    Json(serde_json::Value),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Render this value as a Postgres literal.
    ///
    /// Text is wrapped in single quotes with every embedded `'` doubled, so the
    /// result can never close the surrounding literal early.
    pub fn to_sql_literal(&self) -> String {
        let mut out = String::new();
        self.write_sql_literal(&mut out);
        out
    }

    pub(crate) fn write_sql_literal(&self, out: &mut String) {
        match self {
            Value::Null => out.push_str("NULL"),
            Value::Bool(true) => out.push_str("TRUE"),
            Value::Bool(false) => out.push_str("FALSE"),
            Value::Int(n) => out.push_str(&n.to_string()),
            Value::Float(f) => write_float_literal(*f, out),
            Value::Timestamp(ts) => {
                push_quoted(out, &ts.to_rfc3339_opts(SecondsFormat::Millis, true));
            }
            Value::Text(s) => push_quoted(out, s),
            Value::Json(json) => push_quoted(out, &json.to_string()),
        }
    }
}

fn write_float_literal(f: f64, out: &mut String) {
    // Postgres only accepts the special float values as quoted strings.
    if f.is_nan() {
        out.push_str("'NaN'");
    } else if f.is_infinite() {
        out.push_str(if f > 0.0 { "'Infinity'" } else { "'-Infinity'" });
    } else {
        out.push_str(&f.to_string());
    }
}

fn push_quoted(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("''");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
}

// ==================== Driver binding ====================

fn is_text_like(ty: &Type) -> bool {
    matches!(
        *ty,
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME | Type::UNKNOWN
    )
}

fn wrong_type<T>(ty: &Type) -> Box<dyn StdError + Sync + Send> {
    Box::new(WrongType::new::<T>(ty.clone()))
}

/// Binds a value to the server-side parameter type.
///
/// | Variant | Accepted types |
/// |---|---|
/// | `Null` | any (sent as SQL NULL) |
/// | `Bool` | `BOOL` |
/// | `Int` | `INT2`, `INT4` (range-checked), `INT8`, `FLOAT4`, `FLOAT8` |
/// | `Float` | `FLOAT4`, `FLOAT8` |
/// | `Timestamp` | `TIMESTAMPTZ`, `TIMESTAMP` (UTC wall time), `DATE` |
/// | `Json` | `JSON`, `JSONB` |
///
/// Every variant also binds to `TEXT`, `VARCHAR`, `BPCHAR`, `NAME` and
/// `UNKNOWN` as its text form. `Int` and `Float` bind to `NUMERIC` only with
/// the `rust_decimal` feature; without it, and for any other pairing, the
/// driver gets a [`WrongType`] error.
impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn StdError + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(b) => match *ty {
                Type::BOOL => b.to_sql(ty, out),
                _ if is_text_like(ty) => (if *b { "true" } else { "false" }).to_sql(ty, out),
                _ => Err(wrong_type::<bool>(ty)),
            },
            Value::Int(n) => match *ty {
                Type::INT2 => i16::try_from(*n)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*n)?.to_sql(ty, out),
                Type::INT8 => n.to_sql(ty, out),
                Type::FLOAT4 => (*n as f32).to_sql(ty, out),
                Type::FLOAT8 => (*n as f64).to_sql(ty, out),
                #[cfg(feature = "rust_decimal")]
                Type::NUMERIC => rust_decimal::Decimal::from(*n).to_sql(ty, out),
                _ if is_text_like(ty) => n.to_string().to_sql(ty, out),
                _ => Err(wrong_type::<i64>(ty)),
            },
            Value::Float(f) => match *ty {
                Type::FLOAT4 => (*f as f32).to_sql(ty, out),
                Type::FLOAT8 => f.to_sql(ty, out),
                #[cfg(feature = "rust_decimal")]
                Type::NUMERIC => rust_decimal::Decimal::try_from(*f)?.to_sql(ty, out),
                _ if is_text_like(ty) => f.to_string().to_sql(ty, out),
                _ => Err(wrong_type::<f64>(ty)),
            },
            Value::Timestamp(ts) => match *ty {
                Type::TIMESTAMPTZ => ts.to_sql(ty, out),
                Type::TIMESTAMP => ts.naive_utc().to_sql(ty, out),
                Type::DATE => ts.date_naive().to_sql(ty, out),
                _ if is_text_like(ty) => ts
                    .to_rfc3339_opts(SecondsFormat::Millis, true)
                    .to_sql(ty, out),
                _ => Err(wrong_type::<DateTime<Utc>>(ty)),
            },
            Value::Text(s) => {
                if is_text_like(ty) {
                    s.as_str().to_sql(ty, out)
                } else {
                    Err(wrong_type::<String>(ty))
                }
            }
            Value::Json(json) => match *ty {
                Type::JSON | Type::JSONB => json.to_sql(ty, out),
                _ if is_text_like(ty) => json.to_string().to_sql(ty, out),
                _ => Err(wrong_type::<serde_json::Value>(ty)),
            },
        }
    }

    // Each variant checks the server-side type itself.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

// ==================== serde ====================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Timestamp(ts) => ts.serialize(serializer),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Json(json) => json.serialize(serializer),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Value::Int(i),
                (None, Some(f)) => Value::Float(f),
                (None, None) => Value::Json(serde_json::Value::Number(n)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            other => Value::Json(other),
        }
    }
}

// ==================== Conversions ====================

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(v as f64),
        }
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
