//! Records: ordered column → value mappings.
//!
//! A [`Record`] remembers the order in which columns were first set; that order
//! becomes the column list of the generated statement. There is no external
//! schema: the columns are whatever keys the record carries.

use crate::error::{InsertError, InsertResult};
use crate::value::Value;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered mapping from column name to [`Value`].
///
/// Setting a column that already exists replaces its value but keeps its
/// original position.
///
/// # Example
/// ```ignore
/// use pginsert::Record;
///
/// let user = Record::new()
///     .set("name", "Alice")
///     .set("age", 25)
///     .set("admin", true);
/// assert_eq!(user.columns().collect::<Vec<_>>(), ["name", "age", "admin"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Record {
    entries: IndexMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with room for `capacity` columns.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Set a column value (consuming builder form of [`Record::insert`]).
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a column value, returning the previous value if the column existed.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(column.into(), value.into())
    }

    /// Get a column value.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries.get(column)
    }

    /// Check whether a column is present.
    pub fn contains(&self, column: &str) -> bool {
        self.entries.contains_key(column)
    }

    /// Column names in first-appearance order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a record from a JSON object, keeping its key order.
    ///
    /// Fails with [`InsertError::InvalidInput`] if `json` is not an object.
    pub fn from_json(json: &serde_json::Value) -> InsertResult<Self> {
        match json {
            serde_json::Value::Object(map) => Ok(map
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(v.clone())))
                .collect()),
            _ => Err(InsertError::invalid_input("expected a single JSON object")),
        }
    }

    /// Build a record from any value that serializes to a map (typically a
    /// `#[derive(Serialize)]` struct). Field order follows serialization order.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> InsertResult<Self> {
        let json = serde_json::to_value(value)?;
        Self::from_json(&json).map_err(|_| {
            InsertError::invalid_input("value does not serialize to a map of columns")
        })
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut record = Record::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Records are equal when they hold the same columns, in the same order, with
/// equal values.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl TryFrom<&serde_json::Value> for Record {
    type Error = InsertError;

    fn try_from(json: &serde_json::Value) -> InsertResult<Self> {
        Record::from_json(json)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (column, value) in &self.entries {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Build a [`Record`] from `column => value` pairs.
///
/// # Example
/// ```ignore
/// let r = pginsert::record! { "name" => "Alice", "age" => 25 };
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($column:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $( record.insert($column, $value); )+
        record
    }};
}

/// Input accepted by [`build_auto`](crate::build_auto): one record or a batch.
#[derive(Debug, Clone, Copy)]
pub enum InsertInput<'a> {
    One(&'a Record),
    Many(&'a [Record]),
}

impl<'a> From<&'a Record> for InsertInput<'a> {
    fn from(record: &'a Record) -> Self {
        InsertInput::One(record)
    }
}

impl<'a> From<&'a [Record]> for InsertInput<'a> {
    fn from(records: &'a [Record]) -> Self {
        InsertInput::Many(records)
    }
}

impl<'a> From<&'a Vec<Record>> for InsertInput<'a> {
    fn from(records: &'a Vec<Record>) -> Self {
        InsertInput::Many(records.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [Record; N]> for InsertInput<'a> {
    fn from(records: &'a [Record; N]) -> Self {
        InsertInput::Many(records.as_slice())
    }
}
