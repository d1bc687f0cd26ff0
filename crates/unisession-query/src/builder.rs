//! The fluent SELECT accumulator behind the legacy `query` operation.

use std::marker::PhantomData;
use unisession_core::{Entity, Statement, Value};

/// Sort direction for an ORDER BY column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Asc,
    Desc,
}

/// Legacy SELECT query builder for one entity.
///
/// Accumulates equality filters, ordering, and paging, then renders a
/// [`Statement`] with positional placeholders. Superseded by the
/// statement-based API; constructed through a session's `query` operation.
///
/// # Example
///
/// ```ignore
/// let stmt = session.query::<Hero>()?
///     .filter("name", "Deadpond")
///     .order_by("id")
///     .limit(10)
///     .statement();
/// ```
#[derive(Debug, Clone)]
pub struct Query<M: Entity> {
    filters: Vec<(String, Value)>,
    order: Vec<(String, Direction)>,
    limit: Option<u64>,
    offset: Option<u64>,
    _marker: PhantomData<fn() -> M>,
}

impl<M: Entity> Default for Query<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Entity> Query<M> {
    /// Create an empty query over the entity's table.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
            offset: None,
            _marker: PhantomData,
        }
    }

    /// Add an equality filter; filters combine with AND.
    pub fn filter(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push((column.to_string(), value.into()));
        self
    }

    /// Sort ascending by a column.
    pub fn order_by(mut self, column: &str) -> Self {
        self.order.push((column.to_string(), Direction::Asc));
        self
    }

    /// Sort descending by a column.
    pub fn order_by_desc(mut self, column: &str) -> Self {
        self.order.push((column.to_string(), Direction::Desc));
        self
    }

    /// Cap the number of returned rows.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Skip leading rows.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// The entity name this query selects from.
    pub fn entity(&self) -> &'static str {
        M::ENTITY_NAME
    }

    /// Render the accumulated query as an executable statement.
    pub fn statement(&self) -> Statement {
        let mut sql = format!("SELECT * FROM {}", M::ENTITY_NAME);
        let mut params = Vec::with_capacity(self.filters.len());

        if !self.filters.is_empty() {
            let clauses: Vec<String> = self
                .filters
                .iter()
                .enumerate()
                .map(|(i, (column, _))| format!("{} = ${}", column, i + 1))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
            params.extend(self.filters.iter().map(|(_, value)| value.clone()));
        }

        if !self.order.is_empty() {
            let clauses: Vec<String> = self
                .order
                .iter()
                .map(|(column, direction)| match direction {
                    Direction::Asc => column.clone(),
                    Direction::Desc => format!("{column} DESC"),
                })
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&clauses.join(", "));
        }

        if let Some(n) = self.limit {
            sql.push_str(&format!(" LIMIT {n}"));
        }
        if let Some(n) = self.offset {
            sql.push_str(&format!(" OFFSET {n}"));
        }

        tracing::debug!(entity = M::ENTITY_NAME, sql = %sql, "Rendered legacy query");

        let mut stmt = Statement::new(sql);
        for value in params {
            stmt = stmt.bind(value);
        }
        stmt
    }
}
