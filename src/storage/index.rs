//! Unique hash indexes for tinyrel
//!
//! One index per primary-key or UNIQUE column, mapping each non-null value
//! to the id of the single row holding it.

use super::store::RowId;
use super::value::Value;
use std::collections::HashMap;

/// A unique hash index over one column
#[derive(Debug, Default)]
pub struct HashIndex {
    entries: HashMap<Value, RowId>,
}

impl HashIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value mapping. The caller guarantees uniqueness; null
    /// values must never be inserted.
    pub fn insert(&mut self, value: Value, id: RowId) {
        debug_assert!(!value.is_null());
        self.entries.insert(value, id);
    }

    /// Remove a value mapping
    pub fn remove(&mut self, value: &Value) {
        self.entries.remove(value);
    }

    /// Look up the row holding a value
    pub fn lookup(&self, value: &Value) -> Option<RowId> {
        self.entries.get(value).copied()
    }

    /// Check if a value is present
    pub fn contains(&self, value: &Value) -> bool {
        self.entries.contains_key(value)
    }

    /// Number of indexed values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
