use sluice_core::{schema::DbField, Result, SchemaProvider};

use dashmap::DashMap;

use std::sync::Arc;

/// Memoizes [`SchemaProvider`] lookups per table.
///
/// Table names are compared case-insensitively. Concurrent misses for the
/// same table may both query the provider; the first result stored wins.
pub struct DbFieldCache {
    provider: Arc<dyn SchemaProvider>,
    tables: DashMap<String, Arc<[DbField]>>,
}

impl DbFieldCache {
    pub fn new(provider: Arc<dyn SchemaProvider>) -> DbFieldCache {
        DbFieldCache {
            provider,
            tables: DashMap::new(),
        }
    }

    pub fn get(&self, table: &str) -> Result<Arc<[DbField]>> {
        let key = table.to_lowercase();

        if let Some(fields) = self.tables.get(&key) {
            return Ok(fields.clone());
        }

        let fields: Arc<[DbField]> = self.provider.db_fields(table)?.into();
        tracing::debug!(table, columns = fields.len(), "loaded db fields");

        Ok(self.tables.entry(key).or_insert(fields).clone())
    }
}

impl core::fmt::Debug for DbFieldCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DbFieldCache")
            .field("tables", &self.tables.len())
            .finish()
    }
}
