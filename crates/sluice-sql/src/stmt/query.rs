use super::{hash_filter, insert::hash_fields};
use sluice_core::stmt::{Field, OrderField, QueryGroup};

use std::hash::{Hash, Hasher};

/// `SELECT` of the rows matching `filter`, optionally limited to `top` rows.
#[derive(Debug, Clone, Default)]
pub struct Query<'a> {
    pub table: &'a str,
    pub fields: &'a [Field],
    pub filter: Option<&'a QueryGroup>,
    pub order_by: Option<&'a [OrderField]>,
    pub top: Option<i64>,
    pub hints: Option<&'a str>,
}

/// `SELECT` of every row.
#[derive(Debug, Clone, Default)]
pub struct QueryAll<'a> {
    pub table: &'a str,
    pub fields: &'a [Field],
    pub order_by: Option<&'a [OrderField]>,
    pub hints: Option<&'a str>,
}

/// `SELECT` of page `page` (zero based) of `rows_per_batch` rows.
#[derive(Debug, Clone, Default)]
pub struct BatchQuery<'a> {
    pub table: &'a str,
    pub fields: &'a [Field],
    pub filter: Option<&'a QueryGroup>,
    pub order_by: &'a [OrderField],
    pub page: i64,
    pub rows_per_batch: i64,
    pub hints: Option<&'a str>,
}

/// `SELECT` of `take` rows after skipping `skip` rows.
#[derive(Debug, Clone, Default)]
pub struct SkipQuery<'a> {
    pub table: &'a str,
    pub fields: &'a [Field],
    pub filter: Option<&'a QueryGroup>,
    pub order_by: &'a [OrderField],
    pub skip: i64,
    pub take: i64,
    pub hints: Option<&'a str>,
}

fn hash_order<H: Hasher>(order_by: Option<&[OrderField]>, state: &mut H) {
    order_by
        .map(|fields| {
            fields
                .iter()
                .map(|field| (field.name(), field.order()))
                .collect::<Vec<_>>()
        })
        .hash(state);
}

impl Query<'_> {
    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        hash_fields(self.fields, state);
        hash_filter(self.filter, state);
        hash_order(self.order_by, state);
        self.top.hash(state);
        self.hints.hash(state);
    }
}

impl QueryAll<'_> {
    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        hash_fields(self.fields, state);
        hash_order(self.order_by, state);
        self.hints.hash(state);
    }
}

impl BatchQuery<'_> {
    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        hash_fields(self.fields, state);
        hash_filter(self.filter, state);
        hash_order(Some(self.order_by), state);
        self.page.hash(state);
        self.rows_per_batch.hash(state);
        self.hints.hash(state);
    }
}

impl SkipQuery<'_> {
    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        hash_fields(self.fields, state);
        hash_filter(self.filter, state);
        hash_order(Some(self.order_by), state);
        self.skip.hash(state);
        self.take.hash(state);
        self.hints.hash(state);
    }
}
