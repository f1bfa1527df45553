pub mod command;
pub use command::{Command, Commands, Filter, Param, Query};

pub mod entity;
pub use entity::{Entity, Primitive, Property};

pub mod expr;
pub use expr::{Expr, Path, Sort};

pub mod materialize;
pub use materialize::{Materializer, Routine};

pub mod registry;
pub use registry::{
    Builder, Conversion, DbFieldCache, EntityMeta, Mapper, PropertyMeta, Registry, Settings,
};

pub use sluice_macros::Entity;

pub use sluice_core::{
    bail, driver, dynamic, err, schema, stmt, Dialect, Error, Reader, Result, SchemaProvider,
};
pub use sluice_sql::stmt::Function;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Entity, Path, Primitive, Property};
    pub use sluice_core::{stmt::Value, Result};
}
