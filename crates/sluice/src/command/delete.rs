use super::{query::bindings, Command, Commands, Filter};
use crate::Entity;

use sluice_core::Result;
use sluice_sql::{stmt, Statement};

impl<'a> Commands<'a> {
    /// Deletes the rows matching `filter`.
    pub fn delete<T: Entity>(&self, filter: impl Into<Filter<T>>) -> Result<Command> {
        let filter = filter.into().compile(self.registry)?;
        let table = self.registry.table_name::<T>();

        let stmt = Statement::from(stmt::Delete {
            table: &table,
            filter: Some(&filter),
            hints: self.hints.as_deref(),
        });

        self.render(stmt, bindings(Some(&filter)))
    }

    /// Deletes every row.
    pub fn delete_all<T: Entity>(&self) -> Result<Command> {
        let table = self.registry.table_name::<T>();

        let stmt = Statement::from(stmt::DeleteAll {
            table: &table,
            hints: self.hints.as_deref(),
        });

        self.render(stmt, vec![])
    }

    /// Empties the table. SQLite has no `TRUNCATE`, so it deletes every row.
    pub fn truncate<T: Entity>(&self) -> Result<Command> {
        let table = self.registry.table_name::<T>();
        self.render(Statement::from(stmt::Truncate { table: &table }), vec![])
    }
}
