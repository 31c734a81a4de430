//! Inner-join execution for tinyrel
//!
//! Two strategies with identical result sets: a nested-loop scan of both
//! tables, and an index lookup against the right table when the right
//! join column carries a unique index. Join matching is strict tagged
//! equality; null join values never match anything, other nulls included.

use super::QueryResult;
use crate::storage::{Row, Table};
use tracing::debug;

/// How a join is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStrategy {
    /// Scan every right row for every left row
    NestedLoop,
    /// Probe the right table's unique index on the join column
    IndexLookup,
}

/// Pick the strategy for a join: index lookup whenever the right join
/// column is uniquely indexed, nested loop otherwise.
pub fn strategy_for(right: &Table, right_col: usize) -> JoinStrategy {
    if right.index_on(right_col).is_some() {
        JoinStrategy::IndexLookup
    } else {
        JoinStrategy::NestedLoop
    }
}

/// Execute an inner join of two tables on a column pair.
///
/// A requested `IndexLookup` falls back to the nested loop when the right
/// join column has no index, so both entry points accept any inputs.
pub(crate) fn execute(
    left: &Table,
    right: &Table,
    left_col: usize,
    right_col: usize,
    strategy: JoinStrategy,
) -> QueryResult {
    let columns = qualified_columns(left, right);

    let rows = match (strategy, right.index_on(right_col)) {
        (JoinStrategy::IndexLookup, Some(index)) => {
            debug!(left = %left.name(), right = %right.name(), "index lookup join");
            let mut rows = Vec::new();
            for left_row in left.rows() {
                let key = &left_row.values()[left_col];
                if key.is_null() {
                    continue;
                }
                if let Some(id) = index.lookup(key) {
                    let right_row = right.row_by_id(id).expect("indexed row present");
                    rows.push(left_row.concat(right_row));
                }
            }
            rows
        }
        _ => {
            debug!(left = %left.name(), right = %right.name(), "nested loop join");
            nested_loop(left, right, left_col, right_col)
        }
    };

    QueryResult { columns, rows }
}

fn nested_loop(left: &Table, right: &Table, left_col: usize, right_col: usize) -> Vec<Row> {
    let mut rows = Vec::new();
    for left_row in left.rows() {
        let key = &left_row.values()[left_col];
        if key.is_null() {
            continue;
        }
        for right_row in right.rows() {
            if key == &right_row.values()[right_col] {
                rows.push(left_row.concat(right_row));
            }
        }
    }
    rows
}

/// Output column names, table-qualified to keep collisions apart
fn qualified_columns(left: &Table, right: &Table) -> Vec<String> {
    left.schema()
        .column_names()
        .iter()
        .map(|c| format!("{}.{}", left.name(), c))
        .chain(
            right
                .schema()
                .column_names()
                .iter()
                .map(|c| format!("{}.{}", right.name(), c)),
        )
        .collect()
}
