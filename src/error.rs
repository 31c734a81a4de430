//! Error types for tinyrel
//!
//! This module defines all error types used throughout the storage engine.

use crate::catalog::DataType;
use crate::storage::Value;
use thiserror::Error;

/// The main error type for tinyrel
#[derive(Error, Debug)]
pub enum Error {
    // ========== Catalog Errors ==========
    #[error("table '{0}' already exists")]
    TableAlreadyExists(String),

    #[error("table '{0}' not found")]
    TableNotFound(String),

    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("column '{0}' already exists in table '{1}'")]
    ColumnAlreadyExists(String, String),

    #[error("table '{0}' declares more than one primary key column")]
    MultiplePrimaryKeys(String),

    // ========== Validation Errors ==========
    #[error("expected {expected} values, got {got}")]
    ColumnCountMismatch { expected: usize, got: usize },

    #[error("column '{column}' expects {expected}, got {found}")]
    TypeMismatch {
        column: String,
        expected: DataType,
        found: &'static str,
    },

    #[error("column '{0}' cannot be null")]
    NullNotAllowed(String),

    #[error("unique constraint violation on column '{0}'")]
    UniqueViolation(String),

    // ========== Lookup Errors ==========
    #[error("table '{0}' has no primary key")]
    NoPrimaryKey(String),

    #[error("no row with key {key} in table '{table}'")]
    RowNotFound { table: String, key: Value },

    // ========== Persistence Errors ==========
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for tinyrel operations
pub type Result<T> = std::result::Result<T, Error>;
