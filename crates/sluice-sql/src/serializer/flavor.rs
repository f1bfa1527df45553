use super::Serializer;

use sluice_core::Dialect;

impl Serializer {
    pub fn new(dialect: Dialect) -> Serializer {
        Serializer {
            dialect,
            capability: dialect.capability(),
        }
    }

    pub fn sql_server() -> Serializer {
        Serializer::new(Dialect::SqlServer)
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(Dialect::Sqlite)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Dialect::Mysql)
    }
}
