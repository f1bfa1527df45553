use super::Serializer;
use crate::stmt::{Delete, DeleteAll, Truncate};

use sluice_core::{Dialect, Result};

impl Serializer {
    pub(super) fn delete(&self, stmt: &Delete<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;

        let mut b = self.builder();
        b.delete_from().table_name(stmt.table).hints(stmt.hints);
        self.where_clause(&mut b, stmt.filter);
        b.end();

        Ok(b.build())
    }

    pub(super) fn delete_all(&self, stmt: &DeleteAll<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;

        let mut b = self.builder();
        b.delete_from()
            .table_name(stmt.table)
            .hints(stmt.hints)
            .end();

        Ok(b.build())
    }

    /// SQLite has no `TRUNCATE`; an unfiltered delete is its equivalent.
    pub(super) fn truncate(&self, stmt: &Truncate<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;

        let mut b = self.builder();
        match self.dialect {
            Dialect::Sqlite => b.delete_from(),
            _ => b.write("TRUNCATE TABLE"),
        };
        b.table_name(stmt.table).end();

        Ok(b.build())
    }
}
