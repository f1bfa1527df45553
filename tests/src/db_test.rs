use crate::StaticSchema;

use sluice::{registry::Builder, Dialect, Registry};

/// Per-dialect test state.
///
/// Every registry built here renders in the test's dialect. Expected text is
/// written with SQL Server quoting and translated with
/// [`quoted`](DbTest::quoted).
pub struct DbTest {
    dialect: Dialect,
    schema: StaticSchema,
}

impl DbTest {
    pub fn new(dialect: Dialect) -> DbTest {
        crate::init_tracing();

        DbTest {
            dialect,
            schema: StaticSchema::default(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The schema provider handed to every registry from
    /// [`registry`](DbTest::registry).
    pub fn schema(&mut self) -> &mut StaticSchema {
        &mut self.schema
    }

    pub fn registry(&self) -> Registry {
        self.registry_with(|_| {})
    }

    pub fn registry_with(&self, f: impl FnOnce(&mut Builder)) -> Registry {
        let mut builder = Registry::builder();
        builder
            .dialect(self.dialect)
            .schema_provider(self.schema.clone());
        f(&mut builder);
        builder.build()
    }

    /// Rewrites `[name]` quoting into the dialect's quoting.
    pub fn quoted(&self, sql_server: &str) -> String {
        match self.dialect {
            Dialect::Mysql => sql_server.replace(['[', ']'], "`"),
            _ => sql_server.to_string(),
        }
    }

    /// Picks the text expected for the test's dialect.
    pub fn pick<'a>(&self, sql_server: &'a str, sqlite: &'a str, mysql: &'a str) -> &'a str {
        match self.dialect {
            Dialect::SqlServer => sql_server,
            Dialect::Sqlite => sqlite,
            Dialect::Mysql => mysql,
        }
    }
}
