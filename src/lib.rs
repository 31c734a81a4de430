//! tinyrel - A minimal in-memory relational storage engine
//!
//! This library provides the core components of a small relational
//! database:
//! - Typed schemas with primary-key, unique, and not-null constraints
//! - Constraint-enforced row storage with unique hash indexes
//! - Predicate-based filtering for selects, updates, and deletes
//! - Inner joins with automatic index-lookup optimization
//! - Snapshot persistence that rebuilds indexes on restore
//!
//! Callers pass already-typed arguments and receive structured results
//! and errors; command parsing and presentation live outside this crate.

pub mod catalog;
pub mod database;
pub mod error;
pub mod persistence;
pub mod query;
pub mod storage;
pub mod sync;

pub use catalog::{Column, DataType, Schema};
pub use database::{Database, TableInfo};
pub use error::{Error, Result};
pub use persistence::Snapshot;
pub use query::{CompareOp, JoinStrategy, Predicate, QueryResult};
pub use storage::{Row, RowId, Table, Value};
pub use sync::SharedDatabase;
