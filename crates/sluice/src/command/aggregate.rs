use super::{query::bindings, Command, Commands, Filter};
use crate::{expr::Path, Entity, Primitive};

use sluice_core::{
    stmt::{Field, QueryGroup},
    Result,
};
use sluice_sql::{
    stmt::{self, Function},
    Statement,
};

impl<'a> Commands<'a> {
    /// Counts the rows matching `filter`, as `CountValue`.
    pub fn count<T: Entity>(&self, filter: impl Into<Filter<T>>) -> Result<Command> {
        let filter = filter.into().compile(self.registry)?;
        let table = self.registry.table_name::<T>();

        let stmt = Statement::from(stmt::Count {
            table: &table,
            filter: Some(&filter),
            hints: self.hints.as_deref(),
        });

        self.render(stmt, bindings(Some(&filter)))
    }

    pub fn count_all<T: Entity>(&self) -> Result<Command> {
        let table = self.registry.table_name::<T>();

        let stmt = Statement::from(stmt::CountAll {
            table: &table,
            hints: self.hints.as_deref(),
        });

        self.render(stmt, vec![])
    }

    /// Applies `function` to the column behind `path` over the rows matching
    /// `filter`, or every row.
    pub fn aggregate<T: Entity, V: Primitive>(
        &self,
        function: Function,
        path: Path<T, V>,
        filter: Option<Filter<T>>,
    ) -> Result<Command> {
        let meta = self.registry.meta::<T>();
        let field = match meta.property(path.property()) {
            Some(property) => property.field(),
            None => Field::new(path.property()),
        };
        let filter = self.compile_optional(filter)?;

        let stmt = Statement::from(stmt::Aggregate {
            function,
            table: meta.table_name(),
            field: &field,
            filter: filter.as_ref(),
            hints: self.hints.as_deref(),
        });

        self.render(stmt, bindings(filter.as_ref()))
    }

    pub fn min<T: Entity, V: Primitive>(
        &self,
        path: Path<T, V>,
        filter: Option<Filter<T>>,
    ) -> Result<Command> {
        self.aggregate(Function::Min, path, filter)
    }

    pub fn max<T: Entity, V: Primitive>(
        &self,
        path: Path<T, V>,
        filter: Option<Filter<T>>,
    ) -> Result<Command> {
        self.aggregate(Function::Max, path, filter)
    }

    pub fn sum<T: Entity, V: Primitive>(
        &self,
        path: Path<T, V>,
        filter: Option<Filter<T>>,
    ) -> Result<Command> {
        self.aggregate(Function::Sum, path, filter)
    }

    pub fn average<T: Entity, V: Primitive>(
        &self,
        path: Path<T, V>,
        filter: Option<Filter<T>>,
    ) -> Result<Command> {
        self.aggregate(Function::Average, path, filter)
    }

    /// Selects `1` as `ExistsValue` when any row matches `filter`.
    pub fn exists<T: Entity>(&self, filter: impl Into<Filter<T>>) -> Result<Command> {
        let filter = filter.into().compile(self.registry)?;
        let table = self.registry.table_name::<T>();

        let stmt = Statement::from(stmt::Exists {
            table: &table,
            filter: Some(&filter),
            hints: self.hints.as_deref(),
        });

        self.render(stmt, bindings(Some(&filter)))
    }

    fn compile_optional<T: Entity>(&self, filter: Option<Filter<T>>) -> Result<Option<QueryGroup>> {
        filter
            .map(|filter| filter.compile(self.registry))
            .transpose()
    }
}
