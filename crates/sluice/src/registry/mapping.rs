use super::Registry;
use crate::{Entity, Path};

use sluice_core::{Error, Result};

use std::{collections::HashMap, marker::PhantomData};

/// Explicit mappings registered for one entity type.
#[derive(Debug, Default)]
pub(crate) struct Mapping {
    table: Option<Mapped>,
    primary: Option<Mapped>,
    identity: Option<Mapped>,
    columns: HashMap<&'static str, Mapped>,
    db_types: HashMap<&'static str, Mapped>,

    /// Bumped by every successful registration. Cached metadata and routines
    /// are only valid for the generation they were resolved from.
    generation: u64,
}

#[derive(Debug, Clone)]
struct Mapped {
    value: String,

    /// A later registration may replace this one without forcing.
    overridable: bool,
}

impl Mapping {
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn table(&self) -> Option<&str> {
        self.table.as_ref().map(|mapped| mapped.value.as_str())
    }

    pub(crate) fn primary(&self) -> Option<&str> {
        self.primary.as_ref().map(|mapped| mapped.value.as_str())
    }

    pub(crate) fn identity(&self) -> Option<&str> {
        self.identity.as_ref().map(|mapped| mapped.value.as_str())
    }

    pub(crate) fn column(&self, property: &str) -> Option<&str> {
        self.columns.get(property).map(|mapped| mapped.value.as_str())
    }

    pub(crate) fn db_type(&self, property: &str) -> Option<&str> {
        self.db_types.get(property).map(|mapped| mapped.value.as_str())
    }
}

/// Fluent registration of explicit mappings for `T`, from
/// [`Registry::map`].
///
/// Each kind of mapping can be registered once per type. A second
/// registration fails with a "mapping already exists" error unless the first
/// was marked [`overridable`](Mapper::overridable) or the second is
/// [`forced`](Mapper::force). Every successful registration evicts the
/// resolved metadata and materialization routines of `T`.
pub struct Mapper<'a, T> {
    registry: &'a Registry,
    force: bool,
    overridable: bool,
    _p: PhantomData<fn() -> T>,
}

impl<'a, T: Entity> Mapper<'a, T> {
    pub(crate) fn new(registry: &'a Registry) -> Self {
        Mapper {
            registry,
            force: false,
            overridable: false,
            _p: PhantomData,
        }
    }

    /// Registrations after this call replace existing ones.
    pub fn force(mut self) -> Self {
        self.force = true;
        self
    }

    /// Registrations after this call may later be replaced without forcing.
    pub fn overridable(mut self) -> Self {
        self.overridable = true;
        self
    }

    pub fn table(self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        self.update(|mapping, registration| {
            registration.check(mapping.table.as_ref(), "table", &name)?;
            mapping.table = Some(registration.mapped(name));
            Ok(())
        })?;
        Ok(self)
    }

    pub fn primary<V>(self, path: Path<T, V>) -> Result<Self> {
        let property = property::<T>(path.property())?;
        self.update(|mapping, registration| {
            registration.check(mapping.primary.as_ref(), "primary", property)?;
            mapping.primary = Some(registration.mapped(property.to_string()));
            Ok(())
        })?;
        Ok(self)
    }

    pub fn identity<V>(self, path: Path<T, V>) -> Result<Self> {
        let property = property::<T>(path.property())?;
        self.update(|mapping, registration| {
            registration.check(mapping.identity.as_ref(), "identity", property)?;
            mapping.identity = Some(registration.mapped(property.to_string()));
            Ok(())
        })?;
        Ok(self)
    }

    pub fn column<V>(self, path: Path<T, V>, column: impl Into<String>) -> Result<Self> {
        let property = property::<T>(path.property())?;
        let column = column.into();
        self.update(|mapping, registration| {
            registration.check(mapping.columns.get(property), "column", &column)?;
            mapping.columns.insert(property, registration.mapped(column));
            Ok(())
        })?;
        Ok(self)
    }

    /// The database type name of a property, e.g. `NVARCHAR(100)`.
    pub fn db_type<V>(self, path: Path<T, V>, db_type: impl Into<String>) -> Result<Self> {
        let property = property::<T>(path.property())?;
        let db_type = db_type.into();
        self.update(|mapping, registration| {
            registration.check(mapping.db_types.get(property), "db type", &db_type)?;
            mapping.db_types.insert(property, registration.mapped(db_type));
            Ok(())
        })?;
        Ok(self)
    }

    fn update(
        &self,
        f: impl FnOnce(&mut Mapping, Registration) -> Result<()>,
    ) -> Result<()> {
        let registration = Registration {
            type_name: T::NAME,
            force: self.force,
            overridable: self.overridable,
        };

        {
            let mut mapping = self
                .registry
                .inner
                .mappings
                .entry(std::any::TypeId::of::<T>())
                .or_default();
            f(&mut mapping, registration)?;
            mapping.generation += 1;
        }

        self.registry.evict::<T>();
        Ok(())
    }
}

#[derive(Clone, Copy)]
struct Registration {
    type_name: &'static str,
    force: bool,
    overridable: bool,
}

impl Registration {
    /// Fails when `existing` may not be replaced by this registration.
    fn check(&self, existing: Option<&Mapped>, kind: &'static str, value: &str) -> Result<()> {
        let Some(existing) = existing else {
            return Ok(());
        };

        if !existing.overridable && !self.force {
            return Err(Error::mapping_exists(self.type_name, kind, value));
        }

        tracing::warn!(
            entity = self.type_name,
            kind,
            previous = %existing.value,
            value,
            "overriding mapping"
        );
        Ok(())
    }

    fn mapped(&self, value: String) -> Mapped {
        Mapped {
            value,
            overridable: self.overridable,
        }
    }
}

fn property<T: Entity>(name: &str) -> Result<&'static str> {
    T::property(name)
        .map(|property| property.name)
        .ok_or_else(|| {
            Error::invalid_expression(format!(
                "`{name}` is not a mapped property of {}",
                T::NAME
            ))
        })
}
