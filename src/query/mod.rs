//! Query module
//!
//! This module contains the predicate evaluator, the join engine, and the
//! named result type shared by selects and joins.

pub mod join;
pub mod predicate;

pub use join::JoinStrategy;
pub use predicate::{CompareOp, Predicate};

use crate::error::{Error, Result};
use crate::storage::Row;
use serde::Serialize;

/// Result of a select or join: named columns plus rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    /// Column names; join output is table-qualified (`table.column`)
    pub columns: Vec<String>,
    /// Result rows
    pub rows: Vec<Row>,
}

impl QueryResult {
    /// Number of result rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the result is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Project a subset of columns into a new result.
    ///
    /// Names match exactly, or as the bare column of a table-qualified
    /// name (`dept_name` picks `departments.dept_name`).
    pub fn project(&self, names: &[&str]) -> Result<QueryResult> {
        let mut indices = Vec::with_capacity(names.len());
        for name in names {
            let pos = self
                .columns
                .iter()
                .position(|c| c == name)
                .or_else(|| {
                    self.columns
                        .iter()
                        .position(|c| c.ends_with(&format!(".{}", name)))
                })
                .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;
            indices.push(pos);
        }

        Ok(QueryResult {
            columns: names.iter().map(|n| n.to_string()).collect(),
            rows: self.rows.iter().map(|r| r.project(&indices)).collect(),
        })
    }
}
