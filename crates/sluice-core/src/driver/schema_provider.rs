use crate::{schema::DbField, Result};

/// Reports the physical columns of a table.
///
/// Implemented by the execution layer, usually by querying the database
/// catalog. Results are memoized per table by the caller, so implementations
/// do not need to cache.
pub trait SchemaProvider: Send + Sync {
    fn db_fields(&self, table: &str) -> Result<Vec<DbField>>;
}

impl<T: SchemaProvider + ?Sized> SchemaProvider for std::sync::Arc<T> {
    fn db_fields(&self, table: &str) -> Result<Vec<DbField>> {
        (**self).db_fields(table)
    }
}
