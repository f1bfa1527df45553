use super::{batches, order_column, Command, Commands};
use crate::Entity;

use sluice_core::Result;
use sluice_sql::{stmt, Statement};

impl<'a> Commands<'a> {
    /// Inserts one row. The command selects the generated identity, or the
    /// bound primary key, back as `Result`.
    pub fn insert<T: Entity>(&self, entity: &T) -> Result<Command> {
        let target = self.target::<T>()?;

        let insert = stmt::Insert {
            table: target.meta.table_name(),
            fields: &target.fields,
            primary: target.primary.as_ref(),
            identity: target.identity.as_ref(),
            hints: self.hints.as_deref(),
        };

        let mut params = vec![];
        target.bind(entity, &insert.fields_to_insert(), None, &mut params)?;

        self.render(Statement::from(insert), params)
    }

    /// Inserts `entities` in commands of at most `batch_size` rows.
    ///
    /// When keys are returned, each row also selects its position in
    /// `entities` as `OrderColumn`, so results can be matched back to their
    /// rows.
    pub fn insert_all<T: Entity>(&self, entities: &[T], batch_size: usize) -> Result<Vec<Command>> {
        let target = self.target::<T>()?;
        let mut commands = vec![];

        for (offset, batch) in batches(entities, batch_size)? {
            let insert = stmt::InsertAll {
                table: target.meta.table_name(),
                fields: &target.fields,
                batch_size: batch.len() as i64,
                primary: target.primary.as_ref(),
                identity: target.identity.as_ref(),
                hints: self.hints.as_deref(),
            };

            let fields = insert.fields_to_insert();
            let mut params = vec![];

            for (index, entity) in batch.iter().enumerate() {
                target.bind(entity, &fields, Some(index), &mut params)?;
                if insert.returns_key() {
                    params.push(order_column(index, offset + index));
                }
            }

            commands.push(self.render(Statement::from(insert), params)?);
        }

        Ok(commands)
    }
}
