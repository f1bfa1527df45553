use super::{batches, order_column, Command, Commands};
use crate::Entity;

use sluice_core::Result;
use sluice_sql::{stmt, Statement};

impl<'a> Commands<'a> {
    /// Inserts the row, or updates it when a row with the same primary key
    /// exists.
    pub fn merge<T: Entity>(&self, entity: &T) -> Result<Command> {
        self.merge_on(entity, &[])
    }

    /// Like [`merge`](Self::merge), matching on the given properties instead
    /// of the primary key.
    pub fn merge_on<T: Entity>(&self, entity: &T, qualifiers: &[&str]) -> Result<Command> {
        let target = self.target::<T>()?;
        let qualifiers = target.qualifiers(qualifiers);

        let merge = stmt::Merge {
            table: target.meta.table_name(),
            fields: &target.fields,
            qualifiers: Some(&qualifiers),
            primary: target.primary.as_ref(),
            identity: target.identity.as_ref(),
            hints: self.hints.as_deref(),
        };

        let mut params = vec![];
        target.bind(entity, &target.fields, None, &mut params)?;

        self.render(Statement::from(merge), params)
    }

    /// Merges `entities` in commands of at most `batch_size` rows, matching
    /// on `qualifiers` or, when empty, the primary key.
    pub fn merge_all<T: Entity>(
        &self,
        entities: &[T],
        qualifiers: &[&str],
        batch_size: usize,
    ) -> Result<Vec<Command>> {
        let target = self.target::<T>()?;
        let qualifiers = target.qualifiers(qualifiers);
        let mut commands = vec![];

        for (offset, batch) in batches(entities, batch_size)? {
            let merge = stmt::MergeAll {
                table: target.meta.table_name(),
                fields: &target.fields,
                qualifiers: Some(&qualifiers),
                batch_size: batch.len() as i64,
                primary: target.primary.as_ref(),
                identity: target.identity.as_ref(),
                hints: self.hints.as_deref(),
            };

            let mut params = vec![];
            for (index, entity) in batch.iter().enumerate() {
                target.bind(entity, &target.fields, Some(index), &mut params)?;
                params.push(order_column(index, offset + index));
            }

            commands.push(self.render(Statement::from(merge), params)?);
        }

        Ok(commands)
    }
}
