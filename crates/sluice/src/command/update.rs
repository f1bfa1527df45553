use super::{batches, query::bindings, Command, Commands, Filter, Target};
use crate::Entity;

use sluice_core::{stmt::QueryGroup, Result};
use sluice_sql::{stmt, Statement};

impl<'a> Commands<'a> {
    /// Updates the row with the entity's primary key.
    pub fn update<T: Entity>(&self, entity: &T) -> Result<Command> {
        let target = self.target::<T>()?;
        let primary = target.require_primary()?;
        let filter = QueryGroup::equal([(
            primary.name.as_str(),
            target.value(entity, &primary.name)?,
        )])?;

        self.update_where(&target, entity, filter)
    }

    /// Updates the rows matching `filter` with the entity's values. Key
    /// columns are never set.
    pub fn update_by<T: Entity>(&self, entity: &T, filter: impl Into<Filter<T>>) -> Result<Command> {
        let target = self.target::<T>()?;
        let filter = filter.into().compile(self.registry)?;
        self.update_where(&target, entity, filter)
    }

    fn update_where<T: Entity>(
        &self,
        target: &Target,
        entity: &T,
        filter: QueryGroup,
    ) -> Result<Command> {
        let update = stmt::Update {
            table: target.meta.table_name(),
            fields: &target.fields,
            filter: Some(&filter),
            primary: target.primary.as_ref(),
            identity: target.identity.as_ref(),
            hints: self.hints.as_deref(),
        };

        let mut params = vec![];
        target.bind(entity, &update.fields_to_set(), None, &mut params)?;
        params.extend(bindings(update.filter().as_ref()));

        self.render(Statement::from(update), params)
    }

    /// Updates `entities` in commands of at most `batch_size` rows, each
    /// matched on `qualifiers` or, when empty, the primary key.
    pub fn update_all<T: Entity>(
        &self,
        entities: &[T],
        qualifiers: &[&str],
        batch_size: usize,
    ) -> Result<Vec<Command>> {
        let target = self.target::<T>()?;
        let qualifiers = target.qualifiers(qualifiers);
        let mut commands = vec![];

        for (_, batch) in batches(entities, batch_size)? {
            let update = stmt::UpdateAll {
                table: target.meta.table_name(),
                fields: &target.fields,
                qualifiers: Some(&qualifiers),
                batch_size: batch.len() as i64,
                primary: target.primary.as_ref(),
                identity: target.identity.as_ref(),
                hints: self.hints.as_deref(),
            };

            let set = update.fields_to_set();
            let matched = update.qualifiers();

            // Qualifiers are validated by the statement before any are bound.
            let text = self.text(&Statement::from(update))?;
            let mut params = vec![];

            for (index, entity) in batch.iter().enumerate() {
                target.bind(entity, &set, Some(index), &mut params)?;
                target.bind(entity, &matched, Some(index), &mut params)?;
            }

            commands.push(self.command(text, params));
        }

        Ok(commands)
    }
}

