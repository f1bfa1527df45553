mod builder;
pub use builder::Builder;

mod db_field_cache;
pub use db_field_cache::DbFieldCache;

mod mapping;
pub use mapping::Mapper;
pub(crate) use mapping::Mapping;

mod meta;
pub use meta::{EntityMeta, PropertyMeta};

mod settings;
pub use settings::{Conversion, Settings};

use crate::{
    command::StatementCache,
    expr::{self, Expr, Sort},
    materialize::Materializer,
    Entity,
};

use sluice_core::{
    schema::DbField,
    stmt::{Field, OrderField, QueryGroup},
    Result,
};

use dashmap::DashMap;
use std::{any::TypeId, sync::Arc};

/// Entity metadata, explicit mappings and compiled routines, shared by every
/// clone.
///
/// Lookups are memoized per entity type. Registering a mapping evicts what
/// was derived from the old one, so later lookups see the new mapping.
#[derive(Clone)]
pub struct Registry {
    pub(crate) inner: Arc<Inner>,
}

pub(crate) struct Inner {
    pub(crate) settings: Settings,
    pub(crate) metas: DashMap<TypeId, (u64, Arc<EntityMeta>)>,
    pub(crate) mappings: DashMap<TypeId, Mapping>,
    pub(crate) db_fields: Option<DbFieldCache>,
    pub(crate) statements: StatementCache,
    pub(crate) materializer: Materializer,
}

impl Registry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A registry with default settings and no schema provider.
    pub fn new() -> Registry {
        Builder::default().build()
    }

    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    /// Starts an explicit mapping for `T`.
    pub fn map<T: Entity>(&self) -> Mapper<'_, T> {
        Mapper::new(self)
    }

    /// The resolved metadata of `T`, computed once per mapping.
    pub fn meta<T: Entity>(&self) -> Arc<EntityMeta> {
        self.resolved::<T>().1
    }

    /// The metadata of `T` with the mapping generation it was resolved from.
    ///
    /// A cached entry is only returned while its generation is current, so a
    /// resolution racing a registration never outlives it.
    pub(crate) fn resolved<T: Entity>(&self) -> (u64, Arc<EntityMeta>) {
        let id = TypeId::of::<T>();
        let current = self.generation(id);

        if let Some(cached) = self.inner.metas.get(&id) {
            if cached.0 == current {
                return (current, cached.1.clone());
            }
        }

        let (generation, meta) = {
            let mapping = self.inner.mappings.get(&id);
            let generation = mapping.as_ref().map_or(0, |mapping| mapping.generation());
            let meta = EntityMeta::resolve::<T>(mapping.as_deref());
            (generation, Arc::new(meta))
        };

        tracing::debug!(
            entity = T::NAME,
            table = meta.table_name(),
            generation,
            "resolved entity"
        );

        let mut cached = self
            .inner
            .metas
            .entry(id)
            .or_insert_with(|| (generation, meta.clone()));
        if cached.0 < generation {
            *cached = (generation, meta.clone());
        }

        if cached.0 == generation {
            (generation, cached.1.clone())
        } else {
            (generation, meta)
        }
    }

    fn generation(&self, id: TypeId) -> u64 {
        self.inner
            .mappings
            .get(&id)
            .map_or(0, |mapping| mapping.generation())
    }

    /// Drops everything derived from the mapping of `T`.
    pub(crate) fn evict<T: Entity>(&self) {
        let id = TypeId::of::<T>();
        let generation = self.generation(id);
        self.inner.metas.remove_if(&id, |_, cached| cached.0 < generation);
        self.inner.materializer.evict(id, generation);
    }

    pub fn table_name<T: Entity>(&self) -> String {
        self.meta::<T>().table_name().to_string()
    }

    /// The mapped columns of `T`, typed, in declaration order.
    pub fn fields<T: Entity>(&self) -> Vec<Field> {
        self.meta::<T>().fields()
    }

    /// The column a property maps to.
    pub fn column_name<T: Entity>(&self, property: &str) -> Option<String> {
        self.meta::<T>()
            .property(property)
            .map(|property| property.column().to_string())
    }

    /// The declared database type of a property, if any.
    pub fn db_type<T: Entity>(&self, property: &str) -> Option<String> {
        self.meta::<T>()
            .property(property)
            .and_then(|property| property.db_type().map(str::to_string))
    }

    /// The physical columns of `table`. Empty when no schema provider is
    /// configured.
    pub fn db_fields(&self, table: &str) -> Result<Arc<[DbField]>> {
        match &self.inner.db_fields {
            Some(cache) => cache.get(table),
            None => Ok(Arc::from([])),
        }
    }

    /// The primary key column of `T`.
    ///
    /// The entity's own primary property wins; otherwise the column the
    /// database reports as primary, if any.
    pub fn primary<T: Entity>(&self) -> Result<Option<DbField>> {
        let meta = self.meta::<T>();
        let schema = self.db_fields(meta.table_name())?;

        Ok(match meta.primary() {
            Some(property) => Some(property.db_field(&schema).primary()),
            None => schema.iter().find(|field| field.is_primary).cloned(),
        })
    }

    /// The identity column of `T`, resolved like [`primary`](Self::primary).
    pub fn identity<T: Entity>(&self) -> Result<Option<DbField>> {
        let meta = self.meta::<T>();
        let schema = self.db_fields(meta.table_name())?;

        Ok(match meta.identity() {
            Some(property) => Some(property.db_field(&schema).identity()),
            None => schema.iter().find(|field| field.is_identity).cloned(),
        })
    }

    /// Compiles a typed expression into a group over the mapped columns.
    pub fn compile<T: Entity>(&self, expr: &Expr<T>) -> Result<QueryGroup> {
        expr::compile(&self.meta::<T>(), &expr.untyped)
    }

    /// Resolves typed sort keys into order fields over the mapped columns.
    pub fn order_by<T: Entity>(&self, sorts: &[Sort<T>]) -> Result<Vec<OrderField>> {
        let meta = self.meta::<T>();

        sorts
            .iter()
            .map(|sort| {
                let column = meta
                    .property(sort.property())
                    .map(|property| property.column())
                    .unwrap_or(sort.property());
                OrderField::new(column, sort.order())
            })
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("settings", &self.inner.settings)
            .field("entities", &self.inner.metas.len())
            .field("mappings", &self.inner.mappings.len())
            .finish()
    }
}
