//! Storage module
//!
//! This module contains the storage components:
//! - Cell values and rows
//! - The ordered, id-addressed row store
//! - Unique hash indexes
//! - Tables tying the three together under constraint enforcement

pub mod index;
pub mod row;
pub mod store;
pub mod table;
pub mod value;

pub use index::HashIndex;
pub use row::Row;
pub use store::{RowId, RowStore};
pub use table::Table;
pub use value::Value;
