//! Database container for tinyrel
//!
//! This module manages the name-to-table mapping and exposes the
//! table-scoped operations callers use: create/drop/describe plus insert,
//! select, update, delete, primary-key point operations, and inner joins.
//!
//! A `Database` is a plain owned value; nothing here is global. Callers
//! that share one across threads wrap it in [`crate::sync::SharedDatabase`].

use crate::catalog::{Column, Schema};
use crate::error::{Error, Result};
use crate::query::{join, JoinStrategy, Predicate, QueryResult};
use crate::storage::{Row, RowId, Table, Value};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Structured table description, returned by [`Database::describe`]
#[derive(Debug, Clone, Serialize)]
pub struct TableInfo {
    /// Table name
    pub name: String,
    /// Column definitions in declaration order
    pub columns: Vec<Column>,
    /// Current row count
    pub row_count: usize,
}

/// A database: an insertion-ordered mapping from table name to table
#[derive(Debug)]
pub struct Database {
    /// Database name
    name: String,
    /// Tables in creation order
    tables: IndexMap<String, Table>,
}

impl Database {
    /// Create an empty database
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: IndexMap::new(),
        }
    }

    /// Get the database name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a new table from column definitions.
    ///
    /// The table becomes visible only after the schema validates; a
    /// failed creation leaves the database unchanged.
    pub fn create_table(&mut self, name: impl Into<String>, columns: Vec<Column>) -> Result<()> {
        let name = name.into();
        if self.tables.contains_key(&name) {
            return Err(Error::TableAlreadyExists(name));
        }

        let schema = Schema::from_columns(&name, columns)?;
        debug!(table = %name, "create table");
        self.tables.insert(name.clone(), Table::new(name, schema));
        Ok(())
    }

    /// Drop a table, discarding its rows and indexes
    pub fn drop_table(&mut self, name: &str) -> Result<()> {
        self.tables
            .shift_remove(name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))?;
        debug!(table = %name, "drop table");
        Ok(())
    }

    /// Get a table by name
    pub fn table(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    /// Get a table by name, mutably
    pub fn table_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    /// Check if a table exists
    pub fn table_exists(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// List table names in creation order
    pub fn list_tables(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    /// Describe a table: columns and row count
    pub fn describe(&self, name: &str) -> Result<TableInfo> {
        let table = self.table(name)?;
        Ok(TableInfo {
            name: table.name().to_string(),
            columns: table.schema().columns().to_vec(),
            row_count: table.row_count(),
        })
    }

    /// Insert a row into a table
    pub fn insert(&mut self, table: &str, row: Row) -> Result<RowId> {
        self.table_mut(table)?.insert(row)
    }

    /// Select rows, optionally filtered by a predicate and projected to a
    /// subset of columns (`None` or a `*` entry selects all columns).
    pub fn select(
        &self,
        table: &str,
        columns: Option<&[&str]>,
        predicate: Option<&Predicate>,
    ) -> Result<QueryResult> {
        let table = self.table(table)?;
        let result = QueryResult {
            columns: table
                .schema()
                .column_names()
                .iter()
                .map(|c| c.to_string())
                .collect(),
            rows: table.select_where(predicate)?,
        };

        match columns {
            None => Ok(result),
            Some(names) if names.is_empty() || names.contains(&"*") => Ok(result),
            Some(names) => result.project(names),
        }
    }

    /// Update matching rows, returning the count changed
    pub fn update(
        &mut self,
        table: &str,
        predicate: Option<&Predicate>,
        assignments: &[(String, Value)],
    ) -> Result<usize> {
        self.table_mut(table)?.update_where(predicate, assignments)
    }

    /// Delete matching rows, returning the count removed
    pub fn delete(&mut self, table: &str, predicate: Option<&Predicate>) -> Result<usize> {
        self.table_mut(table)?.delete_where(predicate)
    }

    /// Index-backed lookup of one row by primary-key value
    pub fn row_by_primary_key(&self, table: &str, key: &Value) -> Result<&Row> {
        self.table(table)?.row_by_primary_key(key)
    }

    /// Index-backed delete of one row by primary-key value
    pub fn delete_by_primary_key(&mut self, table: &str, key: &Value) -> Result<()> {
        self.table_mut(table)?.delete_by_primary_key(key)
    }

    /// Inner-join two tables on a column pair, selecting the index-lookup
    /// strategy automatically when the right join column is uniquely
    /// indexed.
    pub fn inner_join(
        &self,
        left: &str,
        right: &str,
        left_col: &str,
        right_col: &str,
    ) -> Result<QueryResult> {
        let (left, right, lpos, rpos) = self.resolve_join(left, right, left_col, right_col)?;
        let strategy = join::strategy_for(right, rpos);
        Ok(join::execute(left, right, lpos, rpos, strategy))
    }

    /// Inner-join with an explicit strategy. An `IndexLookup` request
    /// falls back to the nested loop when no index covers the right join
    /// column, so results are the same for either strategy.
    pub fn inner_join_with(
        &self,
        strategy: JoinStrategy,
        left: &str,
        right: &str,
        left_col: &str,
        right_col: &str,
    ) -> Result<QueryResult> {
        let (left, right, lpos, rpos) = self.resolve_join(left, right, left_col, right_col)?;
        Ok(join::execute(left, right, lpos, rpos, strategy))
    }

    /// The strategy [`Database::inner_join`] would pick for this join
    pub fn join_strategy(&self, right: &str, right_col: &str) -> Result<JoinStrategy> {
        let right = self.table(right)?;
        let rpos = right.schema().require_column(right_col)?;
        Ok(join::strategy_for(right, rpos))
    }

    fn resolve_join(
        &self,
        left: &str,
        right: &str,
        left_col: &str,
        right_col: &str,
    ) -> Result<(&Table, &Table, usize, usize)> {
        let left = self.table(left)?;
        let right = self.table(right)?;
        let lpos = left.schema().require_column(left_col)?;
        let rpos = right.schema().require_column(right_col)?;
        Ok((left, right, lpos, rpos))
    }

    /// Tables in creation order
    pub(crate) fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }
}
