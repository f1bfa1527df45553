use super::Serializer;
use crate::stmt::{Aggregate, Count, CountAll, Exists, Function};

use sluice_core::{stmt::QueryGroup, Dialect, Result};

impl Serializer {
    pub(super) fn count(&self, stmt: &Count<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;
        Ok(self.count_text(stmt.table, stmt.filter, stmt.hints))
    }

    pub(super) fn count_all(&self, stmt: &CountAll<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;
        Ok(self.count_text(stmt.table, None, stmt.hints))
    }

    fn count_text(&self, table: &str, filter: Option<&QueryGroup>, hints: Option<&str>) -> String {
        let count = match self.dialect {
            Dialect::SqlServer => "COUNT_BIG (1)",
            Dialect::Sqlite | Dialect::Mysql => "COUNT(*)",
        };

        let mut b = self.builder();
        b.select()
            .write(count)
            .as_("CountValue")
            .from()
            .table_name(table)
            .hints(hints);
        self.where_clause(&mut b, filter);
        b.end();
        b.build()
    }

    pub(super) fn aggregate(&self, stmt: &Aggregate<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;
        self.guard_fields(std::slice::from_ref(stmt.field), stmt.function.sql_text())?;

        let mut b = self.builder();
        let column = b.quote(stmt.field.name());
        let argument = match (stmt.function, self.dialect) {
            // Averaging integers on SQL Server truncates.
            (Function::Average, Dialect::SqlServer) => format!("CONVERT(FLOAT, {column})"),
            _ => column,
        };

        b.select()
            .write(format!("{} ({argument})", stmt.function.sql_text()))
            .as_(stmt.function.alias())
            .from()
            .table_name(stmt.table)
            .hints(stmt.hints);
        self.where_clause(&mut b, stmt.filter);
        b.end();

        Ok(b.build())
    }

    pub(super) fn exists(&self, stmt: &Exists<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;

        let mut b = self.builder();
        b.select();
        if self.dialect == Dialect::SqlServer {
            b.top(1);
        }
        b.write("1")
            .as_("ExistsValue")
            .from()
            .table_name(stmt.table)
            .hints(stmt.hints);
        self.where_clause(&mut b, stmt.filter);
        if self.dialect != Dialect::SqlServer {
            b.write("LIMIT 1");
        }
        b.end();

        Ok(b.build())
    }
}
