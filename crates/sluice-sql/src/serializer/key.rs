use super::Serializer;
use crate::QueryBuilder;

use sluice_core::{schema::DbField, stmt::Field, Dialect};

/// The value an insert or merge returns for a row.
pub(super) enum KeyReturn<'a> {
    /// The identity generated by the database.
    Identity(&'a DbField),

    /// The bound primary key value, echoed back.
    Primary(&'a DbField),

    None,
}

impl<'a> KeyReturn<'a> {
    /// An identity column wins over the primary key. The primary key is only
    /// echoed when it is bound, i.e. among `fields`.
    pub(super) fn resolve(
        fields: &[Field],
        primary: Option<&'a DbField>,
        identity: Option<&'a DbField>,
    ) -> KeyReturn<'a> {
        match (identity, primary) {
            (Some(identity), _) => KeyReturn::Identity(identity),
            (None, Some(primary)) if fields.iter().any(|f| f.is_named(&primary.name)) => {
                KeyReturn::Primary(primary)
            }
            _ => KeyReturn::None,
        }
    }
}

impl Serializer {
    /// The key expression for row `index` of a batch, or of the only row.
    pub(super) fn key_expr(
        &self,
        b: &QueryBuilder,
        key: &KeyReturn<'_>,
        index: Option<usize>,
    ) -> String {
        match key {
            KeyReturn::Identity(field) => {
                self.convert(self.capability.identity_expr.to_string(), field)
            }
            KeyReturn::Primary(field) => {
                let parameter = b.parameter(&Field::new(field.name.as_str()), index);
                self.convert(parameter, field)
            }
            KeyReturn::None => "NULL".to_string(),
        }
    }

    /// Wraps `expr` in a conversion to the column's database type when the
    /// type is known and the dialect converts.
    pub(super) fn convert(&self, expr: String, field: &DbField) -> String {
        let Some(ty) = field.full_database_type() else {
            return expr;
        };

        match self.dialect {
            Dialect::SqlServer => format!("CONVERT({ty}, {expr})"),
            Dialect::Sqlite => format!("CAST({expr} AS {ty})"),
            Dialect::Mysql => expr,
        }
    }

    /// `@__OrderColumn_{index}`
    pub(super) fn order_column(&self, b: &QueryBuilder, index: usize) -> String {
        b.parameter_named("__OrderColumn", Some(index))
    }
}
