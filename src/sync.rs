//! Shared database handle
//!
//! The engine itself is a plain owned value; this module provides the
//! reader-writer wrapper for callers that share one database across
//! threads. Mutating operations go through `write`, read-only operations
//! (select, join, describe) may run concurrently through `read`.

use crate::database::Database;
use std::sync::{Arc, RwLock};

/// A clonable, thread-safe handle to a database
#[derive(Debug, Clone)]
pub struct SharedDatabase {
    inner: Arc<RwLock<Database>>,
}

impl SharedDatabase {
    /// Wrap a database in a shared handle
    pub fn new(db: Database) -> Self {
        Self {
            inner: Arc::new(RwLock::new(db)),
        }
    }

    /// Run a read-only operation under the shared lock
    pub fn read<R>(&self, f: impl FnOnce(&Database) -> R) -> R {
        f(&self.inner.read().unwrap())
    }

    /// Run a mutating operation under the exclusive lock
    pub fn write<R>(&self, f: impl FnOnce(&mut Database) -> R) -> R {
        f(&mut self.inner.write().unwrap())
    }
}
