//! Convenient imports for typical `pginsert` usage.
//!
//! ```ignore
//! use pginsert::prelude::*;
//! ```

pub use crate::{
    InsertError, InsertInput, InsertOptions, InsertResult, Record, RenderMode, Statement, Value,
    build_auto, build_bulk_insert, build_insert, record,
};
