use super::{Command, Commands, Filter};
use crate::{Entity, Expr, Sort};

use sluice_core::{
    stmt::{OrderField, QueryGroup},
    Result,
};
use sluice_sql::{stmt, Statement};

/// What to select: an optional filter, an ordering and an optional row
/// limit.
pub struct Query<T> {
    filter: Option<Filter<T>>,
    sorts: Vec<Sort<T>>,
    order_by: Vec<OrderField>,
    top: Option<i64>,
}

impl<T: Entity> Query<T> {
    /// Every row, unordered.
    pub fn new() -> Query<T> {
        Query {
            filter: None,
            sorts: vec![],
            order_by: vec![],
            top: None,
        }
    }

    pub fn filter(mut self, filter: impl Into<Filter<T>>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn order_by(mut self, sort: Sort<T>) -> Self {
        self.sorts.push(sort);
        self
    }

    /// Orders by prebuilt fields, after any typed sorts. Names are used as
    /// column names.
    pub fn order_by_fields(mut self, fields: impl IntoIterator<Item = OrderField>) -> Self {
        self.order_by.extend(fields);
        self
    }

    /// Limits the result to `rows` rows; zero means no limit.
    pub fn top(mut self, rows: i64) -> Self {
        self.top = Some(rows);
        self
    }
}

impl<T: Entity> Default for Query<T> {
    fn default() -> Self {
        Query::new()
    }
}

impl<T: Entity> From<Expr<T>> for Query<T> {
    fn from(value: Expr<T>) -> Self {
        Query::new().filter(value)
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Query {
            filter: self.filter.clone(),
            sorts: self.sorts.clone(),
            order_by: self.order_by.clone(),
            top: self.top,
        }
    }
}

impl<T> core::fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Query")
            .field("filter", &self.filter)
            .field("sorts", &self.sorts)
            .field("order_by", &self.order_by)
            .field("top", &self.top)
            .finish()
    }
}

/// A query with its filter and ordering resolved against the registry.
struct Resolved {
    filter: Option<QueryGroup>,
    order_by: Vec<OrderField>,
}

impl<'a> Commands<'a> {
    /// Selects the matching rows. Without a filter or a limit this is a
    /// select of every row.
    pub fn query<T: Entity>(&self, query: impl Into<Query<T>>) -> Result<Command> {
        let query = query.into();
        let target = self.target::<T>()?;
        let resolved = self.resolve(&query)?;
        let order_by = (!resolved.order_by.is_empty()).then_some(&resolved.order_by[..]);

        let stmt = match (&resolved.filter, query.top) {
            (None, None) => Statement::from(stmt::QueryAll {
                table: target.meta.table_name(),
                fields: &target.fields,
                order_by,
                hints: self.hints.as_deref(),
            }),
            (filter, top) => Statement::from(stmt::Query {
                table: target.meta.table_name(),
                fields: &target.fields,
                filter: filter.as_ref(),
                order_by,
                top,
                hints: self.hints.as_deref(),
            }),
        };

        self.render(stmt, bindings(resolved.filter.as_ref()))
    }

    /// Selects page `page` (zero based) of `rows_per_batch` rows. The query
    /// must be ordered.
    pub fn batch_query<T: Entity>(
        &self,
        query: impl Into<Query<T>>,
        page: i64,
        rows_per_batch: i64,
    ) -> Result<Command> {
        let query = query.into();
        let target = self.target::<T>()?;
        let resolved = self.resolve(&query)?;

        let stmt = Statement::from(stmt::BatchQuery {
            table: target.meta.table_name(),
            fields: &target.fields,
            filter: resolved.filter.as_ref(),
            order_by: &resolved.order_by,
            page,
            rows_per_batch,
            hints: self.hints.as_deref(),
        });

        self.render(stmt, bindings(resolved.filter.as_ref()))
    }

    /// Selects `take` rows after skipping `skip`. The query must be ordered.
    pub fn skip_query<T: Entity>(
        &self,
        query: impl Into<Query<T>>,
        skip: i64,
        take: i64,
    ) -> Result<Command> {
        let query = query.into();
        let target = self.target::<T>()?;
        let resolved = self.resolve(&query)?;

        let stmt = Statement::from(stmt::SkipQuery {
            table: target.meta.table_name(),
            fields: &target.fields,
            filter: resolved.filter.as_ref(),
            order_by: &resolved.order_by,
            skip,
            take,
            hints: self.hints.as_deref(),
        });

        self.render(stmt, bindings(resolved.filter.as_ref()))
    }

    fn resolve<T: Entity>(&self, query: &Query<T>) -> Result<Resolved> {
        let filter = query
            .filter
            .as_ref()
            .map(|filter| filter.compile(self.registry))
            .transpose()?;

        let mut order_by = self.registry.order_by(&query.sorts)?;
        order_by.extend(query.order_by.iter().cloned());

        Ok(Resolved { filter, order_by })
    }
}

/// The parameters a filter binds.
pub(super) fn bindings(filter: Option<&QueryGroup>) -> Vec<super::Param> {
    filter
        .map(QueryGroup::bindings)
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| super::Param { name, value })
        .collect()
}
