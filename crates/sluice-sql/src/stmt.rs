mod aggregate;
pub use aggregate::{Aggregate, Count, CountAll, Exists, Function};

mod delete;
pub use delete::{Delete, DeleteAll, Truncate};

mod insert;
pub use insert::{Insert, InsertAll};

mod merge;
pub use merge::{Merge, MergeAll};

mod query;
pub use query::{BatchQuery, Query, QueryAll, SkipQuery};

mod update;
pub use update::{Update, UpdateAll};

use std::hash::{Hash, Hasher};

/// A statement request: everything a dialect needs to render one verb.
///
/// Requests borrow their inputs; rendering never mutates them.
#[derive(Debug, Clone)]
pub enum Statement<'a> {
    Insert(Insert<'a>),
    InsertAll(InsertAll<'a>),
    Merge(Merge<'a>),
    MergeAll(MergeAll<'a>),
    Update(Update<'a>),
    UpdateAll(UpdateAll<'a>),
    Delete(Delete<'a>),
    DeleteAll(DeleteAll<'a>),
    Query(Query<'a>),
    QueryAll(QueryAll<'a>),
    BatchQuery(BatchQuery<'a>),
    SkipQuery(SkipQuery<'a>),
    Count(Count<'a>),
    CountAll(CountAll<'a>),
    Aggregate(Aggregate<'a>),
    Exists(Exists<'a>),
    Truncate(Truncate<'a>),
}

impl Statement<'_> {
    /// Hashes everything that affects the rendered text. Bound values are
    /// excluded, so two requests differing only in values hash alike.
    pub fn hash_shape<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Statement::Insert(stmt) => stmt.hash_shape(state),
            Statement::InsertAll(stmt) => stmt.hash_shape(state),
            Statement::Merge(stmt) => stmt.hash_shape(state),
            Statement::MergeAll(stmt) => stmt.hash_shape(state),
            Statement::Update(stmt) => stmt.hash_shape(state),
            Statement::UpdateAll(stmt) => stmt.hash_shape(state),
            Statement::Delete(stmt) => stmt.hash_shape(state),
            Statement::DeleteAll(stmt) => stmt.hash_shape(state),
            Statement::Query(stmt) => stmt.hash_shape(state),
            Statement::QueryAll(stmt) => stmt.hash_shape(state),
            Statement::BatchQuery(stmt) => stmt.hash_shape(state),
            Statement::SkipQuery(stmt) => stmt.hash_shape(state),
            Statement::Count(stmt) => stmt.hash_shape(state),
            Statement::CountAll(stmt) => stmt.hash_shape(state),
            Statement::Aggregate(stmt) => stmt.hash_shape(state),
            Statement::Exists(stmt) => stmt.hash_shape(state),
            Statement::Truncate(stmt) => stmt.hash_shape(state),
        }
    }
}

macro_rules! impl_from_stmt {
    ( $( $name:ident ),* $(,)? ) => {
        $(
            impl<'a> From<$name<'a>> for Statement<'a> {
                fn from(stmt: $name<'a>) -> Self {
                    Statement::$name(stmt)
                }
            }
        )*
    };
}

impl_from_stmt! {
    Insert,
    InsertAll,
    Merge,
    MergeAll,
    Update,
    UpdateAll,
    Delete,
    DeleteAll,
    Query,
    QueryAll,
    BatchQuery,
    SkipQuery,
    Count,
    CountAll,
    Aggregate,
    Exists,
    Truncate,
}

fn hash_filter<H: Hasher>(filter: Option<&sluice_core::stmt::QueryGroup>, state: &mut H) {
    filter.is_some().hash(state);
    if let Some(filter) = filter {
        filter.hash_shape(state);
    }
}

fn hash_key<H: Hasher>(key: Option<&sluice_core::schema::DbField>, state: &mut H) {
    key.map(|field| (&field.name, field.full_database_type()))
        .hash(state);
}

/// `fields` without the given key column.
pub(crate) fn without_key(
    fields: &[sluice_core::stmt::Field],
    key: Option<&sluice_core::schema::DbField>,
) -> Vec<sluice_core::stmt::Field> {
    fields
        .iter()
        .filter(|field| key.map_or(true, |key| !field.is_named(&key.name)))
        .cloned()
        .collect()
}
