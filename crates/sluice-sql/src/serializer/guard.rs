use super::Serializer;

use sluice_core::{
    schema::DbField,
    stmt::{Field, OrderField},
    Error, Result,
};

impl Serializer {
    pub(super) fn guard_table(&self, table: &str) -> Result<()> {
        if table.trim().is_empty() {
            return Err(Error::empty_table_name());
        }
        Ok(())
    }

    pub(super) fn guard_hints(&self, hints: Option<&str>) -> Result<()> {
        match hints {
            Some(hints) if !hints.trim().is_empty() && !self.capability.table_hints => Err(
                Error::unsupported_feature(format!(
                    "table hints are not supported by {}",
                    self.dialect
                )),
            ),
            _ => Ok(()),
        }
    }

    pub(super) fn guard_fields(&self, fields: &[Field], context: &str) -> Result<()> {
        if fields.is_empty() || fields.iter().any(Field::is_empty) {
            return Err(Error::empty_fields(context));
        }
        Ok(())
    }

    pub(super) fn guard_order_by(&self, order_by: &[OrderField], context: &str) -> Result<()> {
        if order_by.is_empty() {
            return Err(Error::empty_order_by(context));
        }
        Ok(())
    }

    pub(super) fn guard_range(&self, name: &'static str, value: i64, min: i64) -> Result<()> {
        if value < min {
            return Err(Error::out_of_range(name, value, min));
        }
        Ok(())
    }

    /// Resolves the columns used to match existing rows.
    ///
    /// Explicit qualifiers must all be among `fields`. Without them the
    /// primary key is used, which must then be among `fields` as well.
    pub(super) fn resolve_qualifiers(
        &self,
        table: &str,
        fields: &[Field],
        qualifiers: Option<&[Field]>,
        primary: Option<&DbField>,
    ) -> Result<Vec<Field>> {
        let qualifiers = match qualifiers {
            Some(qualifiers) if !qualifiers.is_empty() => qualifiers.to_vec(),
            _ => match primary {
                Some(primary) => vec![Field::new(primary.name.as_str())],
                None => return Err(Error::missing_qualifier(table)),
            },
        };

        for qualifier in &qualifiers {
            if !fields.contains(qualifier) {
                return Err(Error::invalid_qualifier(qualifier.name(), table));
            }
        }

        Ok(qualifiers)
    }
}
