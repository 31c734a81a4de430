//! Predicate evaluation for tinyrel
//!
//! WHERE-style conditions represented as an explicit tree of comparison
//! and logical nodes, evaluated per row to a boolean. Evaluation never
//! mutates anything and never fails on data: null operands and
//! incomparable type pairs make every comparison false. The only error is
//! a condition naming an unknown column.

use crate::catalog::Schema;
use crate::error::Result;
use crate::storage::{Row, Value};
use std::cmp::Ordering;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
}

impl CompareOp {
    /// Apply this operator to an order-comparison outcome.
    ///
    /// `None` (null or incomparable operands) is false for every
    /// operator, including `Neq`.
    fn test(self, ordering: Option<Ordering>) -> bool {
        let Some(ord) = ordering else {
            return false;
        };
        match self {
            CompareOp::Eq => ord == Ordering::Equal,
            CompareOp::Neq => ord != Ordering::Equal,
            CompareOp::Lt => ord == Ordering::Less,
            CompareOp::Gt => ord == Ordering::Greater,
            CompareOp::Lte => ord != Ordering::Greater,
            CompareOp::Gte => ord != Ordering::Less,
        }
    }
}

/// A row filter condition
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Compare a column's value against a literal
    Compare {
        column: String,
        op: CompareOp,
        value: Value,
    },
    /// Both conditions hold
    And(Box<Predicate>, Box<Predicate>),
    /// Either condition holds
    Or(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
    /// Build a comparison leaf
    pub fn compare(column: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Predicate::Compare {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    /// Combine with another condition, requiring both
    pub fn and(self, other: Predicate) -> Self {
        Predicate::And(Box::new(self), Box::new(other))
    }

    /// Combine with another condition, requiring either
    pub fn or(self, other: Predicate) -> Self {
        Predicate::Or(Box::new(self), Box::new(other))
    }

    /// Evaluate this condition against a row
    pub fn evaluate(&self, schema: &Schema, row: &Row) -> Result<bool> {
        match self {
            Predicate::Compare { column, op, value } => {
                let pos = schema.require_column(column)?;
                let cell = &row.values()[pos];
                Ok(op.test(cell.compare(value)))
            }
            Predicate::And(left, right) => {
                Ok(left.evaluate(schema, row)? && right.evaluate(schema, row)?)
            }
            Predicate::Or(left, right) => {
                Ok(left.evaluate(schema, row)? || right.evaluate(schema, row)?)
            }
        }
    }
}
