use super::mapping::Mapping;
use crate::Entity;

use sluice_core::{
    schema::DbField,
    stmt::{Field, Type},
};

use heck::ToUpperCamelCase;

/// Resolved mapping of one entity type.
#[derive(Debug, Clone)]
pub struct EntityMeta {
    name: &'static str,
    table_name: String,
    properties: Vec<PropertyMeta>,
    primary: Option<usize>,
    identity: Option<usize>,
}

/// Resolved mapping of one property.
#[derive(Debug, Clone)]
pub struct PropertyMeta {
    /// Position in [`Entity::properties`].
    pub(crate) index: usize,
    name: &'static str,
    column: String,
    ty: Type,
    nullable: bool,
    db_type: Option<String>,
}

impl EntityMeta {
    /// Applies the precedence rules: explicit mapping, then attributes, then
    /// naming conventions.
    pub(crate) fn resolve<T: Entity>(mapping: Option<&Mapping>) -> EntityMeta {
        let properties: Vec<_> = T::properties()
            .iter()
            .enumerate()
            .map(|(index, property)| PropertyMeta {
                index,
                name: property.name,
                column: mapping
                    .and_then(|mapping| mapping.column(property.name))
                    .or(property.column)
                    .unwrap_or(property.name)
                    .to_string(),
                ty: property.ty,
                nullable: property.nullable,
                db_type: mapping
                    .and_then(|mapping| mapping.db_type(property.name))
                    .or(property.db_type)
                    .map(str::to_string),
            })
            .collect();

        let position = |name: &str| properties.iter().position(|p| p.name == name);

        let table_name = mapping
            .and_then(Mapping::table)
            .or(T::TABLE)
            .unwrap_or(T::NAME)
            .to_string();

        let primary = match mapping.and_then(Mapping::primary) {
            Some(name) => position(name),
            None => T::properties()
                .iter()
                .position(|property| property.key)
                .or_else(|| {
                    properties
                        .iter()
                        .position(|p| p.name.eq_ignore_ascii_case("id"))
                })
                .or_else(|| {
                    let convention = format!("{}Id", T::NAME.to_upper_camel_case());
                    properties
                        .iter()
                        .position(|p| p.name.to_upper_camel_case() == convention)
                }),
        };

        let identity = match mapping.and_then(Mapping::identity) {
            Some(name) => position(name),
            None => T::properties().iter().position(|property| property.auto),
        };

        EntityMeta {
            name: T::NAME,
            table_name,
            properties,
            primary,
            identity,
        }
    }

    /// The entity type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn properties(&self) -> &[PropertyMeta] {
        &self.properties
    }

    pub fn primary(&self) -> Option<&PropertyMeta> {
        self.primary.map(|index| &self.properties[index])
    }

    pub fn identity(&self) -> Option<&PropertyMeta> {
        self.identity.map(|index| &self.properties[index])
    }

    /// Finds a property by name, case-insensitively.
    pub fn property(&self, name: &str) -> Option<&PropertyMeta> {
        self.properties
            .iter()
            .find(|property| property.name.eq_ignore_ascii_case(name))
    }

    /// Finds a property by its mapped column, ignoring case and quotes.
    pub fn by_column(&self, column: &str) -> Option<&PropertyMeta> {
        let column = Field::new(column);
        self.properties
            .iter()
            .find(|property| column.is_named(&property.column))
    }

    /// The mapped columns, typed, in declaration order.
    pub fn fields(&self) -> Vec<Field> {
        self.properties.iter().map(PropertyMeta::field).collect()
    }
}

impl PropertyMeta {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn db_type(&self) -> Option<&str> {
        self.db_type.as_deref()
    }

    pub fn field(&self) -> Field {
        Field::with_type(self.column.as_str(), self.ty)
    }

    /// This property as a physical column, merged with what the database
    /// reports for it. A declared database type wins over the reported one.
    pub(crate) fn db_field(&self, schema: &[DbField]) -> DbField {
        let field = self.field();
        let mut db_field = schema
            .iter()
            .find(|db_field| field.is_named(&db_field.name))
            .cloned()
            .unwrap_or_else(|| {
                let db_field = DbField::new(self.column.as_str()).ty(self.ty);
                if self.nullable {
                    db_field
                } else {
                    db_field.not_null()
                }
            });

        if let Some(db_type) = &self.db_type {
            db_field.database_type = Some(db_type.clone());
            db_field.size = None;
            db_field.precision = None;
            db_field.scale = None;
        }

        db_field
    }
}
