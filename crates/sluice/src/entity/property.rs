use super::Primitive;

use sluice_core::{
    stmt::{Type, Value},
    Result,
};

/// One mapped property of an entity, as declared on the struct.
///
/// Values move in and out through plain function pointers, so a property
/// table can live in a `static`.
pub struct Property<T> {
    /// The Rust field name.
    pub name: &'static str,

    pub ty: Type,

    /// `true` for `Option<_>` fields.
    pub nullable: bool,

    /// `#[key]`
    pub key: bool,

    /// `#[auto]`: the database generates the value.
    pub auto: bool,

    /// `#[column("..")]`
    pub column: Option<&'static str>,

    /// `#[column(type = "..")]`
    pub db_type: Option<&'static str>,

    pub get: fn(&T) -> Value,

    pub set: fn(&mut T, Value) -> Result<()>,
}

impl<T> Property<T> {
    /// A property with no attributes.
    pub const fn new<V: Primitive>(
        name: &'static str,
        get: fn(&T) -> Value,
        set: fn(&mut T, Value) -> Result<()>,
    ) -> Property<T> {
        Property {
            name,
            ty: V::TYPE,
            nullable: V::NULLABLE,
            key: false,
            auto: false,
            column: None,
            db_type: None,
            get,
            set,
        }
    }
}

impl<T> core::fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("nullable", &self.nullable)
            .field("key", &self.key)
            .field("auto", &self.auto)
            .field("column", &self.column)
            .field("db_type", &self.db_type)
            .finish()
    }
}
