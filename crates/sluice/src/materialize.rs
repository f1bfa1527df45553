mod routine;
pub use routine::Routine;

use crate::{Entity, Registry};

use sluice_core::{driver::Reader, err, stmt::Value, Result};

use dashmap::DashMap;
use indexmap::IndexMap;

use std::{
    any::{Any, TypeId},
    sync::Arc,
};

/// Entity type, mapping generation and column signature.
type Key = (TypeId, u64, Vec<String>);

/// Compiled row routines, one per entity type and column signature.
///
/// A routine is built the first time a type meets a signature and reused for
/// every later row with the same ordered column names.
#[derive(Default)]
pub struct Materializer {
    routines: DashMap<Key, Arc<dyn Any + Send + Sync>>,
}

impl Materializer {
    /// The routine for `T` over the reader's current columns.
    pub(crate) fn routine<T, R>(&self, registry: &Registry, reader: &R) -> Result<Arc<Routine<T>>>
    where
        T: Entity,
        R: Reader + ?Sized,
    {
        let (generation, meta) = registry.resolved::<T>();
        let key = (TypeId::of::<T>(), generation, reader.signature());

        let routine = match self.routines.get(&key) {
            Some(routine) => routine.clone(),
            None => {
                let routine = Routine::<T>::compile(&meta, reader, registry.settings().conversion)?;
                let routine: Arc<dyn Any + Send + Sync> = Arc::new(routine);
                self.routines.entry(key).or_insert(routine).clone()
            }
        };

        routine
            .downcast::<Routine<T>>()
            .map_err(|_| err!("cached routine does not belong to {}", T::NAME))
    }

    /// Drops the routines of the given entity type built before `generation`.
    pub(crate) fn evict(&self, id: TypeId, generation: u64) {
        self.routines
            .retain(|(ty, built, _), _| *ty != id || *built >= generation);
    }

    pub fn len(&self) -> usize {
        self.routines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }
}

impl core::fmt::Debug for Materializer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Materializer")
            .field("routines", &self.routines.len())
            .finish()
    }
}

impl Registry {
    /// Reads every remaining row of `reader` into an entity.
    ///
    /// Properties whose column is absent from the result keep their default
    /// value. Fails with a no matched fields error when no column maps to a
    /// property.
    pub fn materialize<T, R>(&self, reader: &mut R) -> Result<Vec<T>>
    where
        T: Entity,
        R: Reader + ?Sized,
    {
        let mut rows = vec![];

        if !reader.read()? {
            return Ok(rows);
        }

        let routine = self.routine::<T, R>(reader)?;

        loop {
            rows.push(routine.read(reader)?);

            if !reader.read()? {
                break;
            }
        }

        Ok(rows)
    }

    /// The routine that materializes `T` from the reader's columns, built on
    /// first use.
    pub fn routine<T, R>(&self, reader: &R) -> Result<Arc<Routine<T>>>
    where
        T: Entity,
        R: Reader + ?Sized,
    {
        self.inner.materializer.routine::<T, R>(self, reader)
    }

    /// Reads every remaining row of `reader` as a column name to value map,
    /// in column order. Nulls are kept.
    pub fn materialize_dynamic<R>(&self, reader: &mut R) -> Result<Vec<IndexMap<String, Value>>>
    where
        R: Reader + ?Sized,
    {
        let names = reader.signature();
        let mut rows = vec![];

        while reader.read()? {
            let mut row = IndexMap::with_capacity(names.len());
            for (ordinal, name) in names.iter().enumerate() {
                let value = if reader.is_null(ordinal) {
                    Value::Null
                } else {
                    reader.get_value(ordinal)?
                };
                row.insert(name.clone(), value);
            }
            rows.push(row);
        }

        Ok(rows)
    }
}
