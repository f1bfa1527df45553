use super::{key::KeyReturn, Serializer};
use crate::stmt::{Insert, InsertAll};

use sluice_core::{stmt::Field, Result};

impl Serializer {
    pub(super) fn insert(&self, stmt: &Insert<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;

        let fields = stmt.fields_to_insert();
        self.guard_fields(&fields, "insert")?;

        let key = KeyReturn::resolve(stmt.fields, stmt.primary, stmt.identity);

        let mut b = self.builder();
        self.insert_row(&mut b, stmt.table, &fields, stmt.hints, None);
        let key = self.key_expr(&b, &key, None);
        b.select().write(key).as_("Result").end();

        Ok(b.build())
    }

    pub(super) fn insert_all(&self, stmt: &InsertAll<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;

        let fields = stmt.fields_to_insert();
        self.guard_fields(&fields, "batch insert")?;
        self.guard_range("batch size", stmt.batch_size, 1)?;

        let key = KeyReturn::resolve(stmt.fields, stmt.primary, stmt.identity);

        let mut b = self.builder();
        for index in 0..stmt.batch_size as usize {
            self.insert_row(&mut b, stmt.table, &fields, stmt.hints, Some(index));

            if stmt.returns_key() {
                let expr = self.key_expr(&b, &key, Some(index));
                let result = b.quote("Result");
                let order = self.order_column(&b, index);
                b.select()
                    .write(format!("{expr} AS {result},"))
                    .write(order)
                    .as_("OrderColumn")
                    .end();
            }
        }

        Ok(b.build())
    }

    fn insert_row(
        &self,
        b: &mut crate::QueryBuilder,
        table: &str,
        fields: &[Field],
        hints: Option<&str>,
        index: Option<usize>,
    ) {
        b.insert_into()
            .table_name(table)
            .hints(hints)
            .open_paren()
            .field_names(fields, None)
            .close_paren()
            .values()
            .open_paren()
            .parameters(fields, index)
            .close_paren()
            .end();
    }
}
