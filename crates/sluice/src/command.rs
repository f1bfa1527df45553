mod aggregate;

mod cache;
pub(crate) use cache::StatementCache;

mod delete;

mod filter;
pub use filter::Filter;

mod insert;
mod merge;

mod query;
pub use query::Query;

mod update;

use crate::{registry::EntityMeta, Entity, Registry};

use sluice_core::{
    schema::DbField,
    stmt::{Field, Value},
    Dialect, Error, Result,
};
use sluice_sql::{Serializer, Statement};

use std::sync::Arc;

/// SQL text and the parameters it binds, ready for the execution layer.
///
/// Parameter names carry no prefix; each one matches a `@name` token in the
/// text.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub text: Arc<str>,
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value: Value,
}

/// Renders commands for entity types through one dialect.
#[derive(Debug, Clone)]
pub struct Commands<'a> {
    registry: &'a Registry,
    serializer: Serializer,
    hints: Option<String>,
}

/// The resolved columns of one entity type.
struct Target {
    meta: Arc<EntityMeta>,
    fields: Vec<Field>,
    primary: Option<DbField>,
    identity: Option<DbField>,
}

impl Command {
    /// The value bound to `name`, compared case-insensitively.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|param| param.name.eq_ignore_ascii_case(name))
            .map(|param| &param.value)
    }
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Param {
        Param {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Registry {
    /// Commands in the configured dialect.
    pub fn commands(&self) -> Commands<'_> {
        self.commands_for(self.settings().dialect)
    }

    pub fn commands_for(&self, dialect: Dialect) -> Commands<'_> {
        Commands {
            registry: self,
            serializer: Serializer::new(dialect),
            hints: None,
        }
    }
}

impl<'a> Commands<'a> {
    /// Table hints for every command rendered from here on. Only SQL Server
    /// accepts them.
    pub fn hints(mut self, hints: impl Into<String>) -> Self {
        self.hints = Some(hints.into());
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.serializer.dialect()
    }

    fn target<T: Entity>(&self) -> Result<Target> {
        let meta = self.registry.meta::<T>();

        Ok(Target {
            fields: meta.fields(),
            primary: self.registry.primary::<T>()?,
            identity: self.registry.identity::<T>()?,
            meta,
        })
    }

    fn render(&self, stmt: Statement<'_>, params: Vec<Param>) -> Result<Command> {
        let text = self.text(&stmt)?;
        Ok(self.command(text, params))
    }

    fn text(&self, stmt: &Statement<'_>) -> Result<Arc<str>> {
        self.registry.inner.statements.render(
            &self.serializer,
            stmt,
            self.registry.settings().statement_cache,
        )
    }

    fn command(&self, text: Arc<str>, params: Vec<Param>) -> Command {
        tracing::trace!(
            dialect = %self.serializer.dialect(),
            sql = %text,
            params = params.len(),
            "rendered command"
        );

        Command { text, params }
    }
}

impl Target {
    /// Binds the values of `entity` for `fields`, suffixed with the row
    /// index when batching.
    fn bind<T: Entity>(
        &self,
        entity: &T,
        fields: &[Field],
        index: Option<usize>,
        params: &mut Vec<Param>,
    ) -> Result<()> {
        for field in fields {
            let value = self.value(entity, field.name())?;
            params.push(Param::new(parameter_name(field, index), value));
        }
        Ok(())
    }

    /// The value of the property mapped to `column`.
    fn value<T: Entity>(&self, entity: &T, column: &str) -> Result<Value> {
        let Some(property) = self.meta.by_column(column) else {
            return Err(Error::invalid_expression(format!(
                "`{column}` is not a mapped column of {}",
                self.meta.name()
            )));
        };

        Ok((T::properties()[property.index].get)(entity))
    }

    /// Maps property names to their columns. Unknown names pass through as
    /// column names; the statement builder validates them.
    fn qualifiers(&self, properties: &[&str]) -> Vec<Field> {
        properties
            .iter()
            .map(|name| match self.meta.property(name) {
                Some(property) => property.field(),
                None => Field::new(*name),
            })
            .collect()
    }

    /// The primary key, or a missing qualifier error.
    fn require_primary(&self) -> Result<&DbField> {
        self.primary
            .as_ref()
            .ok_or_else(|| Error::missing_qualifier(self.meta.table_name()))
    }
}

fn parameter_name(field: &Field, index: Option<usize>) -> String {
    match index {
        Some(index) => format!("{}_{index}", field.parameter_name()),
        None => field.parameter_name(),
    }
}

/// The `__OrderColumn` parameter of row `index`, carrying the row's position
/// in the caller's input.
fn order_column(index: usize, position: usize) -> Param {
    Param::new(format!("__OrderColumn_{index}"), position as i64)
}

/// Splits `entities` into batches of at most `batch_size` rows, with the
/// position of each batch's first row.
fn batches<T>(entities: &[T], batch_size: usize) -> Result<impl Iterator<Item = (usize, &[T])>> {
    if batch_size == 0 {
        return Err(Error::out_of_range("batch size", 0, 1));
    }

    Ok(entities
        .chunks(batch_size)
        .enumerate()
        .map(move |(n, chunk)| (n * batch_size, chunk)))
}
