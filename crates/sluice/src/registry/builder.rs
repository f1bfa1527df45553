use super::{Conversion, DbFieldCache, Inner, Registry, Settings};
use crate::{command::StatementCache, materialize::Materializer};

use sluice_core::{Dialect, SchemaProvider};

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    settings: Settings,
    schema: Option<Arc<dyn SchemaProvider>>,
}

impl Builder {
    pub fn settings(&mut self, settings: Settings) -> &mut Self {
        self.settings = settings;
        self
    }

    pub fn dialect(&mut self, dialect: Dialect) -> &mut Self {
        self.settings.dialect = dialect;
        self
    }

    pub fn conversion(&mut self, conversion: Conversion) -> &mut Self {
        self.settings.conversion = conversion;
        self
    }

    pub fn statement_cache(&mut self, enabled: bool) -> &mut Self {
        self.settings.statement_cache = enabled;
        self
    }

    /// Source of physical column information, consulted for key columns
    /// and database types the entity metadata does not declare.
    pub fn schema_provider(&mut self, provider: impl SchemaProvider + 'static) -> &mut Self {
        self.schema = Some(Arc::new(provider));
        self
    }

    pub fn build(&mut self) -> Registry {
        tracing::debug!(
            dialect = %self.settings.dialect,
            conversion = ?self.settings.conversion,
            statement_cache = self.settings.statement_cache,
            "building registry"
        );

        Registry {
            inner: Arc::new(Inner {
                settings: self.settings.clone(),
                metas: Default::default(),
                mappings: Default::default(),
                db_fields: self.schema.clone().map(DbFieldCache::new),
                statements: StatementCache::default(),
                materializer: Materializer::default(),
            }),
        }
    }
}
