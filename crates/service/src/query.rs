//! Query specifications.
//!
//! A `QuerySpec` describes which rows to read (equality filters), in which
//! order and how many. It is a plain value: built once, then handed to a
//! repository which applies it to the entity's `Select`.

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Clone, Debug)]
pub struct QuerySpec<C> {
    filters: Vec<(C, Value)>,
    order: Vec<(C, Direction)>,
    limit: Option<u64>,
}

impl<C> Default for QuerySpec<C> {
    fn default() -> Self {
        Self { filters: Vec::new(), order: Vec::new(), limit: None }
    }
}

impl<C: ColumnTrait> QuerySpec<C> {
    pub fn new() -> Self { Self::default() }

    /// Keep only rows where `column = value`.
    pub fn filter_eq<V: Into<Value>>(mut self, column: C, value: V) -> Self {
        self.filters.push((column, value.into()));
        self
    }

    /// Append an ordering key; earlier keys take precedence.
    pub fn order_by(mut self, column: C, direction: Direction) -> Self {
        self.order.push((column, direction));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filters(&self) -> &[(C, Value)] { &self.filters }

    pub fn ordering(&self) -> &[(C, Direction)] { &self.order }

    pub fn max_rows(&self) -> Option<u64> { self.limit }

    pub fn apply<E>(&self, mut select: Select<E>) -> Select<E>
    where
        E: EntityTrait<Column = C>,
    {
        for (column, value) in &self.filters {
            select = select.filter(column.eq(value.clone()));
        }
        for (column, direction) in &self.order {
            select = match direction {
                Direction::Asc => select.order_by_asc(*column),
                Direction::Desc => select.order_by_desc(*column),
            };
        }
        if let Some(limit) = self.limit {
            select = select.limit(limit);
        }
        select
    }
}
