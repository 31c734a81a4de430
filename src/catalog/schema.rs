//! Schema definitions for tinyrel
//!
//! This module defines table schemas and column metadata.

use super::types::DataType;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column definition in a table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Data type
    pub data_type: DataType,
    /// Is this the primary key column?
    pub primary_key: bool,
    /// Is this column unique?
    pub unique: bool,
    /// Must this column be non-null?
    pub not_null: bool,
}

impl Column {
    /// Create a new column with no constraints
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            primary_key: false,
            unique: false,
            not_null: false,
        }
    }

    /// Set the primary key flag; a primary key is implicitly NOT NULL
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self
    }

    /// Set the unique flag
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Set the NOT NULL flag
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Does this column carry a unique index (primary key or UNIQUE)?
    pub fn is_indexed(&self) -> bool {
        self.primary_key || self.unique
    }
}

/// Table schema - the ordered column list defining row shape
#[derive(Debug, Clone)]
pub struct Schema {
    /// Ordered list of columns
    columns: Vec<Column>,
    /// Column name to position mapping
    name_to_index: HashMap<String, usize>,
    /// Position of the primary key column, if any
    primary_key: Option<usize>,
}

impl Schema {
    /// Build a schema from a list of columns.
    ///
    /// Fails if a column name repeats or more than one column is flagged
    /// as the primary key.
    pub fn from_columns(table: &str, columns: Vec<Column>) -> Result<Self> {
        let mut name_to_index = HashMap::new();
        let mut primary_key = None;

        for (position, col) in columns.iter().enumerate() {
            if name_to_index.insert(col.name.clone(), position).is_some() {
                return Err(Error::ColumnAlreadyExists(
                    col.name.clone(),
                    table.to_string(),
                ));
            }
            if col.primary_key {
                if primary_key.is_some() {
                    return Err(Error::MultiplePrimaryKeys(table.to_string()));
                }
                primary_key = Some(position);
            }
        }

        Ok(Self {
            columns,
            name_to_index,
            primary_key,
        })
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.name_to_index.get(name).map(|&idx| &self.columns[idx])
    }

    /// Get column position by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Get column position by name, or fail with `ColumnNotFound`
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Get all columns in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the primary key column position, if the table has one
    pub fn primary_key(&self) -> Option<usize> {
        self.primary_key
    }

    /// Get column names in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Positions of columns that carry a unique index (PK and UNIQUE)
    pub fn indexed_columns(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_indexed())
            .map(|(i, _)| i)
            .collect()
    }

}
