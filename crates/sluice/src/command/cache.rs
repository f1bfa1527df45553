use sluice_core::{Dialect, Result};
use sluice_sql::{Serializer, Statement};

use dashmap::DashMap;

use std::{
    collections::hash_map::DefaultHasher,
    hash::Hasher,
    sync::Arc,
};

/// Rendered statement text keyed by dialect and request shape.
///
/// The shape covers everything that affects the text and leaves out bound
/// values, so every row of the same kind shares one entry.
#[derive(Debug, Default)]
pub(crate) struct StatementCache {
    texts: DashMap<(Dialect, u64), Arc<str>>,
}

impl StatementCache {
    pub(crate) fn render(
        &self,
        serializer: &Serializer,
        stmt: &Statement<'_>,
        enabled: bool,
    ) -> Result<Arc<str>> {
        if !enabled {
            return Ok(serializer.serialize(stmt)?.into());
        }

        let mut hasher = DefaultHasher::new();
        stmt.hash_shape(&mut hasher);
        let key = (serializer.dialect(), hasher.finish());

        if let Some(text) = self.texts.get(&key) {
            return Ok(text.clone());
        }

        let text: Arc<str> = serializer.serialize(stmt)?.into();
        tracing::debug!(dialect = %key.0, shape = key.1, "cached statement");

        Ok(self.texts.entry(key).or_insert(text).clone())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.texts.len()
    }
}
