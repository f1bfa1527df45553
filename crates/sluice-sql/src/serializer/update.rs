use super::Serializer;
use crate::stmt::{Update, UpdateAll};

use sluice_core::Result;

impl Serializer {
    pub(super) fn update(&self, stmt: &Update<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;

        let fields = stmt.fields_to_set();
        self.guard_fields(&fields, "update")?;

        let filter = stmt.filter();

        let mut b = self.builder();
        b.update()
            .table_name(stmt.table)
            .hints(stmt.hints)
            .set()
            .fields_and_parameters(&fields, None);
        self.where_clause(&mut b, filter.as_ref());
        b.end();

        Ok(b.build())
    }

    pub(super) fn update_all(&self, stmt: &UpdateAll<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;
        self.guard_fields(stmt.fields, "batch update")?;

        let qualifiers =
            self.resolve_qualifiers(stmt.table, stmt.fields, stmt.qualifiers, stmt.primary)?;

        let fields = stmt.fields_to_set();
        self.guard_fields(&fields, "batch update")?;
        self.guard_range("batch size", stmt.batch_size, 1)?;

        let mut b = self.builder();
        for index in 0..stmt.batch_size as usize {
            let conditions = qualifiers
                .iter()
                .map(|field| {
                    format!(
                        "{} = {}",
                        b.quote(field.name()),
                        b.parameter(field, Some(index))
                    )
                })
                .collect::<Vec<_>>()
                .join(" AND ");

            b.update()
                .table_name(stmt.table)
                .hints(stmt.hints)
                .set()
                .fields_and_parameters(&fields, Some(index))
                .where_()
                .write(format!("({conditions})"))
                .end();
        }

        Ok(b.build())
    }
}
