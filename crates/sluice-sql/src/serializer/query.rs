use super::Serializer;
use crate::stmt::{BatchQuery, Query, QueryAll, SkipQuery};

use sluice_core::{Dialect, Result};

impl Serializer {
    pub(super) fn query(&self, stmt: &Query<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;
        self.guard_fields(stmt.fields, "query")?;
        if let Some(top) = stmt.top {
            self.guard_range("top", top, 0)?;
        }

        let top = stmt.top.filter(|top| *top > 0);

        let mut b = self.builder();
        b.select();
        if let (Some(top), Dialect::SqlServer) = (top, self.dialect) {
            b.top(top);
        }
        b.field_names(stmt.fields, None)
            .from()
            .table_name(stmt.table)
            .hints(stmt.hints);
        self.where_clause(&mut b, stmt.filter);
        if let Some(order_by) = stmt.order_by.filter(|order_by| !order_by.is_empty()) {
            b.order_by().order_by_fields(order_by);
        }
        if let (Some(top), Dialect::Sqlite | Dialect::Mysql) = (top, self.dialect) {
            b.write(format!("LIMIT {top}"));
        }
        b.end();

        Ok(b.build())
    }

    pub(super) fn query_all(&self, stmt: &QueryAll<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;
        self.guard_fields(stmt.fields, "query")?;

        let mut b = self.builder();
        b.select()
            .field_names(stmt.fields, None)
            .from()
            .table_name(stmt.table)
            .hints(stmt.hints);
        if let Some(order_by) = stmt.order_by.filter(|order_by| !order_by.is_empty()) {
            b.order_by().order_by_fields(order_by);
        }
        b.end();

        Ok(b.build())
    }

    /// Page `page` of `rows_per_batch` rows, i.e. rows
    /// `page * rows_per_batch ..` in order-by order.
    pub(super) fn batch_query(&self, stmt: &BatchQuery<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;
        self.guard_fields(stmt.fields, "batch query")?;
        self.guard_order_by(stmt.order_by, "batch query")?;
        self.guard_range("page", stmt.page, 0)?;
        self.guard_range("rows per batch", stmt.rows_per_batch, 1)?;

        let offset = stmt.page.saturating_mul(stmt.rows_per_batch);

        let mut b = self.builder();
        b.select()
            .field_names(stmt.fields, None)
            .from()
            .table_name(stmt.table)
            .hints(stmt.hints);
        self.where_clause(&mut b, stmt.filter);
        b.order_by().order_by_fields(stmt.order_by);

        match self.dialect {
            Dialect::SqlServer => b.offset_fetch(offset, stmt.rows_per_batch),
            Dialect::Sqlite | Dialect::Mysql => b.limit(offset, stmt.rows_per_batch),
        };
        b.end();

        Ok(b.build())
    }

    pub(super) fn skip_query(&self, stmt: &SkipQuery<'_>) -> Result<String> {
        self.guard_table(stmt.table)?;
        self.guard_hints(stmt.hints)?;
        self.guard_fields(stmt.fields, "skip query")?;
        self.guard_order_by(stmt.order_by, "skip query")?;
        self.guard_range("skip", stmt.skip, 0)?;
        self.guard_range("take", stmt.take, 1)?;

        let mut b = self.builder();

        if self.dialect != Dialect::SqlServer {
            b.select()
                .field_names(stmt.fields, None)
                .from()
                .table_name(stmt.table)
                .hints(stmt.hints);
            self.where_clause(&mut b, stmt.filter);
            b.order_by()
                .order_by_fields(stmt.order_by)
                .limit(stmt.skip, stmt.take)
                .end();
            return Ok(b.build());
        }

        let row_number = b.quote("RowNumber");
        let first = stmt.skip.saturating_add(1);
        let last = stmt.skip.saturating_add(stmt.take);

        b.write("WITH CTE AS")
            .open_paren()
            .select()
            .write("ROW_NUMBER() OVER")
            .open_paren()
            .order_by()
            .order_by_fields(stmt.order_by)
            .close_paren()
            .write(format!("AS {row_number},"))
            .field_names(stmt.fields, None)
            .from()
            .table_name(stmt.table)
            .hints(stmt.hints);
        self.where_clause(&mut b, stmt.filter);
        b.close_paren()
            .select()
            .field_names(stmt.fields, None)
            .from()
            .write("CTE")
            .where_()
            .write(format!("({row_number} BETWEEN {first} AND {last})"))
            .order_by()
            .write(format!("{row_number} ASC"))
            .end();

        Ok(b.build())
    }
}
