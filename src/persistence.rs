//! Persistence for tinyrel
//!
//! A `Snapshot` captures the full database state: every table's schema
//! and its rows in append order. Indexes are never serialized; restore
//! rebuilds them from the rows, so index invariants hold the moment a
//! snapshot is loaded. The on-disk encoding is JSON via serde_json.

use crate::catalog::Column;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::storage::Row;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete capture of one database's state
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Database name
    pub name: String,
    /// Tables in creation order
    pub tables: Vec<TableSnapshot>,
}

/// One table's schema and rows
#[derive(Debug, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Table name
    pub name: String,
    /// Column definitions in declaration order
    pub columns: Vec<Column>,
    /// Rows in append order
    pub rows: Vec<Row>,
}

impl Database {
    /// Capture the database state for persistence
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            name: self.name().to_string(),
            tables: self
                .tables()
                .map(|table| TableSnapshot {
                    name: table.name().to_string(),
                    columns: table.schema().columns().to_vec(),
                    rows: table.rows().cloned().collect(),
                })
                .collect(),
        }
    }

    /// Rebuild a database from a snapshot.
    ///
    /// Rows are replayed through the normal insert path, which re-derives
    /// every index and re-checks every constraint; a snapshot that cannot
    /// satisfy them is rejected rather than loaded in a broken state.
    pub fn restore(snapshot: Snapshot) -> Result<Database> {
        let mut db = Database::new(snapshot.name);
        for table in snapshot.tables {
            db.create_table(&table.name, table.columns)?;
            for row in table.rows {
                db.insert(&table.name, row)?;
            }
        }
        Ok(db)
    }
}

/// Save a database snapshot as JSON
pub fn save_to_path(db: &Database, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&db.snapshot())
        .map_err(|e| Error::Serialization(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a database from a JSON snapshot file
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Database> {
    let json = fs::read_to_string(path)?;
    let snapshot: Snapshot =
        serde_json::from_str(&json).map_err(|e| Error::Serialization(e.to_string()))?;
    Database::restore(snapshot)
}
