//! Executable statements and their results.

use crate::row::Row;
use crate::value::Value;

/// A SQL statement with positional parameters, ready for `execute`,
/// `scalars`, or `scalar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql: String,
    params: Vec<Value>,
}

impl Statement {
    /// Create a statement from SQL text with no parameters.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Append a positional parameter.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    /// The SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The positional parameters, in bind order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

/// The result of executing a statement through a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteResult {
    /// Result rows, empty for DML without RETURNING.
    pub rows: Vec<Row>,
    /// Rows affected by DML.
    pub rows_affected: u64,
}

impl ExecuteResult {
    /// A result carrying rows.
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            rows_affected: 0,
        }
    }

    /// A result carrying only an affected-row count.
    pub fn with_affected(rows_affected: u64) -> Self {
        Self {
            rows: Vec::new(),
            rows_affected,
        }
    }
}
