use super::{key::KeyReturn, Serializer};
use crate::{
    stmt::{without_key, Merge, MergeAll},
    QueryBuilder,
};

use sluice_core::{schema::DbField, stmt::Field, Dialect, Error, Result};

/// Everything one merged row needs, shared by the single and batch forms.
struct MergeRow<'a> {
    table: &'a str,
    fields: &'a [Field],
    qualifiers: &'a [Field],
    primary: Option<&'a DbField>,
    identity: Option<&'a DbField>,
    hints: Option<&'a str>,
}

impl Serializer {
    pub(super) fn merge(&self, stmt: &Merge<'_>) -> Result<String> {
        self.guard_merge_supported()?;
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;
        self.guard_fields(stmt.fields, "merge")?;

        let qualifiers =
            self.resolve_qualifiers(stmt.table, stmt.fields, stmt.qualifiers, stmt.primary)?;

        let row = MergeRow {
            table: stmt.table,
            fields: stmt.fields,
            qualifiers: &qualifiers,
            primary: stmt.primary,
            identity: stmt.identity,
            hints: stmt.hints,
        };

        let mut b = self.builder();
        self.merge_row(&mut b, &row, None);
        Ok(b.build())
    }

    pub(super) fn merge_all(&self, stmt: &MergeAll<'_>) -> Result<String> {
        self.guard_merge_supported()?;
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;
        self.guard_fields(stmt.fields, "batch merge")?;

        let qualifiers =
            self.resolve_qualifiers(stmt.table, stmt.fields, stmt.qualifiers, stmt.primary)?;

        self.guard_range("batch size", stmt.batch_size, 1)?;

        let row = MergeRow {
            table: stmt.table,
            fields: stmt.fields,
            qualifiers: &qualifiers,
            primary: stmt.primary,
            identity: stmt.identity,
            hints: stmt.hints,
        };

        let mut b = self.builder();
        for index in 0..stmt.batch_size as usize {
            self.merge_row(&mut b, &row, Some(index));
        }
        Ok(b.build())
    }

    fn guard_merge_supported(&self) -> Result<()> {
        if !self.capability.merge {
            return Err(Error::unsupported_feature(format!(
                "merge is not supported by {}",
                self.dialect
            )));
        }
        Ok(())
    }

    fn merge_row(&self, b: &mut QueryBuilder, row: &MergeRow<'_>, index: Option<usize>) {
        match self.dialect {
            Dialect::Mysql => self.merge_row_on_duplicate_key(b, row, index),
            _ => self.merge_row_merge(b, row, index),
        }
    }

    fn merge_row_merge(&self, b: &mut QueryBuilder, row: &MergeRow<'_>, index: Option<usize>) {
        let insert = without_key(row.fields, row.identity);
        let update = updatable(row.fields, row.qualifiers, row.primary, row.identity);

        let on = row
            .qualifiers
            .iter()
            .map(|field| {
                let name = b.quote(field.name());
                format!("S.{name} = T.{name}")
            })
            .collect::<Vec<_>>()
            .join(" AND ");

        b.write("MERGE")
            .table_name(row.table)
            .hints(row.hints)
            .write("AS T USING")
            .open_paren()
            .select()
            .parameters_as_fields(row.fields, index)
            .close_paren()
            .write("AS S ON")
            .open_paren()
            .write(on)
            .close_paren()
            .write("WHEN NOT MATCHED THEN INSERT")
            .open_paren()
            .field_names(&insert, None)
            .close_paren()
            .values()
            .open_paren()
            .field_names(&insert, Some("S"))
            .close_paren();

        if !update.is_empty() {
            b.write("WHEN MATCHED THEN UPDATE SET")
                .fields_and_aliased_fields(&update, "T", "S");
        }

        let key = match KeyReturn::resolve(row.fields, row.primary, row.identity) {
            KeyReturn::Identity(field) | KeyReturn::Primary(field) => {
                let inserted = format!("INSERTED.{}", b.quote(&field.name));
                self.convert(inserted, field)
            }
            KeyReturn::None => "NULL".to_string(),
        };

        self.write_merge_output(b, "OUTPUT", key, index);
    }

    fn merge_row_on_duplicate_key(
        &self,
        b: &mut QueryBuilder,
        row: &MergeRow<'_>,
        index: Option<usize>,
    ) {
        let mut update = updatable(row.fields, row.qualifiers, row.primary, row.identity);
        if update.is_empty() {
            // Assigning a qualifier to itself keeps the statement valid.
            update = row.qualifiers.to_vec();
        }

        let assignments = update
            .iter()
            .map(|field| {
                let name = b.quote(field.name());
                format!("{name} = VALUES({name})")
            })
            .collect::<Vec<_>>()
            .join(", ");

        b.insert_into()
            .table_name(row.table)
            .open_paren()
            .field_names(row.fields, None)
            .close_paren()
            .values()
            .open_paren()
            .parameters(row.fields, index)
            .close_paren()
            .write("ON DUPLICATE KEY UPDATE")
            .write(assignments)
            .end();

        let key = match KeyReturn::resolve(row.fields, row.primary, row.identity) {
            KeyReturn::Identity(field) if row.fields.iter().any(|f| f.is_named(&field.name)) => {
                let parameter = b.parameter(&Field::new(field.name.as_str()), index);
                format!("COALESCE({parameter}, {})", self.capability.identity_expr)
            }
            key => self.key_expr(b, &key, index),
        };

        self.write_merge_output(b, "SELECT", key, index);
    }

    /// `<keyword> <key> AS [Result][, @__OrderColumn_i AS [OrderColumn]] ;`
    fn write_merge_output(
        &self,
        b: &mut QueryBuilder,
        keyword: &str,
        key: String,
        index: Option<usize>,
    ) {
        b.write(keyword);

        match index {
            Some(index) => {
                let result = b.quote("Result");
                let order = self.order_column(b, index);
                b.write(format!("{key} AS {result},"))
                    .write(order)
                    .as_("OrderColumn");
            }
            None => {
                b.write(key).as_("Result");
            }
        }

        b.end();
    }
}

/// The fields a matched row updates: everything except the qualifiers and the
/// key columns.
fn updatable(
    fields: &[Field],
    qualifiers: &[Field],
    primary: Option<&DbField>,
    identity: Option<&DbField>,
) -> Vec<Field> {
    without_key(&without_key(fields, primary), identity)
        .into_iter()
        .filter(|field| !qualifiers.contains(field))
        .collect()
}
