use serde::Deserialize;

/// The SQL dialect a statement is rendered for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Microsoft SQL Server, the reference dialect.
    #[default]
    #[serde(alias = "mssql", alias = "sqlserver")]
    SqlServer,

    /// SQLite
    Sqlite,

    /// MySQL
    Mysql,
}

impl Dialect {
    pub fn capability(self) -> &'static Capability {
        match self {
            Dialect::SqlServer => &Capability::SQL_SERVER,
            Dialect::Sqlite => &Capability::SQLITE,
            Dialect::Mysql => &Capability::MYSQL,
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Dialect::SqlServer => "SQL Server",
            Dialect::Sqlite => "SQLite",
            Dialect::Mysql => "MySQL",
        })
    }
}

#[derive(Debug)]
pub struct Capability {
    /// When true, table hints (e.g. `WITH (NOLOCK)`) may be attached to a
    /// table reference.
    pub table_hints: bool,

    /// When true, the database has a native upsert form.
    pub merge: bool,

    /// Characters used to quote identifiers.
    pub open_quote: char,
    pub close_quote: char,

    /// Prefix of named parameters in the rendered text.
    pub parameter_prefix: char,

    /// Expression returning the identity value generated by the last insert.
    pub identity_expr: &'static str,
}

impl Capability {
    /// SQL Server capabilities
    pub const SQL_SERVER: Self = Self {
        table_hints: true,
        merge: true,
        open_quote: '[',
        close_quote: ']',
        parameter_prefix: '@',
        identity_expr: "SCOPE_IDENTITY()",
    };

    /// SQLite capabilities
    pub const SQLITE: Self = Self {
        table_hints: false,
        merge: false,
        identity_expr: "last_insert_rowid()",
        ..Self::SQL_SERVER
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        table_hints: false,
        merge: true,
        open_quote: '`',
        close_quote: '`',
        identity_expr: "LAST_INSERT_ID()",
        ..Self::SQL_SERVER
    };
}
