mod flavor;

mod filter;
mod guard;
mod key;

// Verb serializers
mod aggregate;
mod delete;
mod insert;
mod merge;
mod query;
mod update;

use crate::{stmt::Statement, QueryBuilder};

use sluice_core::{Capability, Dialect, Result};

/// Renders statement requests to SQL text for one dialect.
///
/// Every request is validated before anything is rendered. Checks run in a
/// fixed order so the reported error is stable: table name, hints, fields,
/// qualifiers, order-by and finally numeric ranges.
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The dialect decides quoting, paging, key return and which verbs and
    /// hints are supported.
    dialect: Dialect,

    capability: &'static Capability,
}

impl Serializer {
    pub fn serialize(&self, stmt: &Statement<'_>) -> Result<String> {
        match stmt {
            Statement::Insert(stmt) => self.insert(stmt),
            Statement::InsertAll(stmt) => self.insert_all(stmt),
            Statement::Merge(stmt) => self.merge(stmt),
            Statement::MergeAll(stmt) => self.merge_all(stmt),
            Statement::Update(stmt) => self.update(stmt),
            Statement::UpdateAll(stmt) => self.update_all(stmt),
            Statement::Delete(stmt) => self.delete(stmt),
            Statement::DeleteAll(stmt) => self.delete_all(stmt),
            Statement::Query(stmt) => self.query(stmt),
            Statement::QueryAll(stmt) => self.query_all(stmt),
            Statement::BatchQuery(stmt) => self.batch_query(stmt),
            Statement::SkipQuery(stmt) => self.skip_query(stmt),
            Statement::Count(stmt) => self.count(stmt),
            Statement::CountAll(stmt) => self.count_all(stmt),
            Statement::Aggregate(stmt) => self.aggregate(stmt),
            Statement::Exists(stmt) => self.exists(stmt),
            Statement::Truncate(stmt) => self.truncate(stmt),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn capability(&self) -> &'static Capability {
        self.capability
    }

    /// A fresh builder for this dialect.
    pub fn builder(&self) -> QueryBuilder {
        QueryBuilder::new(self.capability)
    }
}
