//! Table storage for tinyrel
//!
//! This module combines a schema, a row store, and the unique indexes over
//! it, enforcing every constraint before any mutation is applied.

use super::index::HashIndex;
use super::row::Row;
use super::store::{RowId, RowStore};
use super::value::Value;
use crate::catalog::{Column, DataType, Schema};
use crate::error::{Error, Result};
use crate::query::Predicate;
use tracing::debug;

/// A table: schema, ordered rows, and one unique index per indexed column
#[derive(Debug)]
pub struct Table {
    /// Table name
    name: String,
    /// Column definitions
    schema: Schema,
    /// Row storage in append order
    store: RowStore,
    /// Unique indexes, keyed by column position
    indexes: Vec<(usize, HashIndex)>,
}

impl Table {
    /// Create an empty table for a schema
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        let indexes = schema
            .indexed_columns()
            .into_iter()
            .map(|pos| (pos, HashIndex::new()))
            .collect();
        Self {
            name: name.into(),
            schema,
            store: RowStore::new(),
            indexes,
        }
    }

    /// Get table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get table schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.store.len()
    }

    /// Iterate rows in append order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.store.iter().map(|(_, row)| row)
    }

    /// Get a row by its stable id
    pub(crate) fn row_by_id(&self, id: RowId) -> Option<&Row> {
        self.store.get(id)
    }

    /// Get the unique index over a column position, if one exists
    pub fn index_on(&self, column: usize) -> Option<&HashIndex> {
        self.indexes
            .iter()
            .find(|(pos, _)| *pos == column)
            .map(|(_, index)| index)
    }

    /// Insert a row.
    ///
    /// Validation (arity, types, NOT NULL, uniqueness) runs completely
    /// before the row store or any index is touched.
    pub fn insert(&mut self, row: Row) -> Result<RowId> {
        if row.len() != self.schema.column_count() {
            return Err(Error::ColumnCountMismatch {
                expected: self.schema.column_count(),
                got: row.len(),
            });
        }

        let row = self.check_row(row)?;

        for (pos, index) in &self.indexes {
            let value = &row.values()[*pos];
            if !value.is_null() && index.contains(value) {
                return Err(Error::UniqueViolation(
                    self.schema.columns()[*pos].name.clone(),
                ));
            }
        }

        let id = self.store.append(row);
        let row = self.store.get(id).expect("row just appended");
        let entries: Vec<(usize, Value)> = self
            .indexes
            .iter()
            .map(|(pos, _)| (*pos, row.values()[*pos].clone()))
            .collect();
        for (pos, value) in entries {
            if !value.is_null() {
                self.index_mut(pos).insert(value, id);
            }
        }

        Ok(id)
    }

    /// Rows matching an optional predicate, in append order
    pub fn select_where(&self, predicate: Option<&Predicate>) -> Result<Vec<Row>> {
        let mut out = Vec::new();
        for (_, row) in self.store.iter() {
            if self.matches(predicate, row)? {
                out.push(row.clone());
            }
        }
        Ok(out)
    }

    /// Update matching rows with the given column assignments, returning
    /// the number of rows changed.
    ///
    /// Each row is validated and then mutated as one atomic step; a
    /// constraint failure on a later row leaves earlier rows updated.
    pub fn update_where(
        &mut self,
        predicate: Option<&Predicate>,
        assignments: &[(String, Value)],
    ) -> Result<usize> {
        // Resolve and type-check the delta once, against the schema.
        let mut resolved: Vec<(usize, Value)> = Vec::with_capacity(assignments.len());
        for (name, value) in assignments {
            let pos = self.schema.require_column(name)?;
            let checked = check_cell(&self.schema.columns()[pos], value.clone())?;
            resolved.push((pos, checked));
        }

        let targets = self.matching_ids(predicate)?;
        let mut updated = 0;

        for id in targets {
            let old = self.store.get(id).expect("matched row present").clone();
            let mut new = old.clone();
            for (pos, value) in &resolved {
                new.set(*pos, value.clone());
            }

            // Uniqueness over changed indexed cells, excluding this row.
            for (pos, index) in &self.indexes {
                let old_value = &old.values()[*pos];
                let new_value = &new.values()[*pos];
                if new_value != old_value && !new_value.is_null() {
                    if let Some(existing) = index.lookup(new_value) {
                        if existing != id {
                            return Err(Error::UniqueViolation(
                                self.schema.columns()[*pos].name.clone(),
                            ));
                        }
                    }
                }
            }

            let swaps: Vec<(usize, Value, Value)> = self
                .indexes
                .iter()
                .map(|(pos, _)| {
                    (
                        *pos,
                        old.values()[*pos].clone(),
                        new.values()[*pos].clone(),
                    )
                })
                .filter(|(_, old_value, new_value)| old_value != new_value)
                .collect();
            for (pos, old_value, new_value) in swaps {
                let index = self.index_mut(pos);
                if !old_value.is_null() {
                    index.remove(&old_value);
                }
                if !new_value.is_null() {
                    index.insert(new_value, id);
                }
            }

            self.store.overwrite(id, new);
            updated += 1;
        }

        debug!(table = %self.name, rows = updated, "update");
        Ok(updated)
    }

    /// Delete matching rows, returning the number removed.
    ///
    /// A predicate matching nothing leaves rows and indexes untouched.
    pub fn delete_where(&mut self, predicate: Option<&Predicate>) -> Result<usize> {
        let targets = self.matching_ids(predicate)?;
        let deleted = targets.len();

        for id in targets {
            self.remove_row(id);
        }

        debug!(table = %self.name, rows = deleted, "delete");
        Ok(deleted)
    }

    /// Index-backed lookup of the row holding a primary-key value
    pub fn row_by_primary_key(&self, key: &Value) -> Result<&Row> {
        let id = self.pk_lookup(key)?;
        Ok(self.store.get(id).expect("indexed row present"))
    }

    /// Index-backed delete of the row holding a primary-key value
    pub fn delete_by_primary_key(&mut self, key: &Value) -> Result<()> {
        let id = self.pk_lookup(key)?;
        self.remove_row(id);
        Ok(())
    }

    fn pk_lookup(&self, key: &Value) -> Result<RowId> {
        let pk = self
            .schema
            .primary_key()
            .ok_or_else(|| Error::NoPrimaryKey(self.name.clone()))?;
        self.index_on(pk)
            .expect("primary key column is indexed")
            .lookup(key)
            .ok_or_else(|| Error::RowNotFound {
                table: self.name.clone(),
                key: key.clone(),
            })
    }

    /// Drop index entries for a row, then remove it from storage
    fn remove_row(&mut self, id: RowId) {
        let row = self.store.get(id).expect("row present").clone();
        for (pos, index) in &mut self.indexes {
            let value = &row.values()[*pos];
            if !value.is_null() {
                index.remove(value);
            }
        }
        self.store.remove(id);
    }

    fn matching_ids(&self, predicate: Option<&Predicate>) -> Result<Vec<RowId>> {
        let mut ids = Vec::new();
        for (id, row) in self.store.iter() {
            if self.matches(predicate, row)? {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    fn matches(&self, predicate: Option<&Predicate>, row: &Row) -> Result<bool> {
        match predicate {
            Some(p) => p.evaluate(&self.schema, row),
            None => Ok(true),
        }
    }

    fn index_mut(&mut self, column: usize) -> &mut HashIndex {
        self.indexes
            .iter_mut()
            .find(|(pos, _)| *pos == column)
            .map(|(_, index)| index)
            .expect("index exists for column")
    }

    /// Type-check every cell against its column, applying the one
    /// permitted coercion, and enforce NOT NULL.
    fn check_row(&self, row: Row) -> Result<Row> {
        let mut values = Vec::with_capacity(row.len());
        for (column, value) in self.schema.columns().iter().zip(row.values()) {
            values.push(check_cell(column, value.clone())?);
        }
        Ok(Row::new(values))
    }
}

/// Check one value against its column definition.
///
/// Integer values are accepted into Float columns and stored as the
/// canonical Float variant, so every value under a column shares one
/// representation.
fn check_cell(column: &Column, value: Value) -> Result<Value> {
    if value.is_null() {
        if column.not_null {
            return Err(Error::NullNotAllowed(column.name.clone()));
        }
        return Ok(Value::Null);
    }

    match (column.data_type, value) {
        (DataType::Integer, v @ Value::Integer(_)) => Ok(v),
        (DataType::Float, v @ Value::Float(_)) => Ok(v),
        (DataType::Float, Value::Integer(i)) => Ok(Value::Float(i as f64)),
        (DataType::Text, v @ Value::Text(_)) => Ok(v),
        (DataType::Boolean, v @ Value::Boolean(_)) => Ok(v),
        (expected, value) => Err(Error::TypeMismatch {
            column: column.name.clone(),
            expected,
            found: value.type_name(),
        }),
    }
}
