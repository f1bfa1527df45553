mod primitive;
pub use primitive::Primitive;

mod property;
pub use property::Property;

/// A type whose instances map to rows of one table.
///
/// Implemented by `#[derive(Entity)]`, which generates the static property
/// table along with typed paths for building predicates. Entities must be
/// `Default` so rows can be materialized one column at a time.
pub trait Entity: Default + Send + Sync + 'static {
    /// The type name, used as the table name when nothing else is mapped.
    const NAME: &'static str;

    /// The `#[table = ".."]` attribute, if any.
    const TABLE: Option<&'static str> = None;

    /// Mapped properties in declaration order. `#[ignore]`d fields are not
    /// listed.
    fn properties() -> &'static [Property<Self>];

    /// Looks up a property by name, case-insensitively.
    fn property(name: &str) -> Option<&'static Property<Self>> {
        Self::properties()
            .iter()
            .find(|property| property.name.eq_ignore_ascii_case(name))
    }
}
