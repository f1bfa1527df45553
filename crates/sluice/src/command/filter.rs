use crate::{Entity, Expr, Registry};

use sluice_core::{
    stmt::{Dynamic, QueryGroup, Value},
    Error, Result,
};

/// The predicate of a command, in any of the accepted input shapes.
///
/// Every shape compiles to the same [`QueryGroup`], so equivalent inputs
/// render identical SQL with identical parameters.
pub enum Filter<T> {
    /// A typed expression over entity properties.
    Expr(Expr<T>),

    /// One predicate per key; keys are column names.
    Dynamic(Dynamic),

    /// A JSON object, read like [`Filter::Dynamic`].
    Json(serde_json::Value),

    /// A prebuilt group, used as is.
    Group(QueryGroup),

    /// Equality on the primary key.
    Key(Value),
}

impl<T: Entity> Filter<T> {
    pub fn key(value: impl Into<Value>) -> Filter<T> {
        Filter::Key(value.into())
    }

    pub(crate) fn compile(&self, registry: &Registry) -> Result<QueryGroup> {
        match self {
            Filter::Expr(expr) => registry.compile(expr),
            Filter::Dynamic(dynamic) => QueryGroup::parse(dynamic),
            Filter::Json(json) => QueryGroup::parse_json(json),
            Filter::Group(group) => Ok(group.clone()),
            Filter::Key(value) => {
                let Some(primary) = registry.primary::<T>()? else {
                    return Err(Error::missing_qualifier(registry.table_name::<T>()));
                };
                QueryGroup::equal([(primary.name, value.clone())])
            }
        }
    }
}

impl<T> From<Expr<T>> for Filter<T> {
    fn from(value: Expr<T>) -> Self {
        Filter::Expr(value)
    }
}

impl<T> From<Dynamic> for Filter<T> {
    fn from(value: Dynamic) -> Self {
        Filter::Dynamic(value)
    }
}

impl<T> From<serde_json::Value> for Filter<T> {
    fn from(value: serde_json::Value) -> Self {
        Filter::Json(value)
    }
}

impl<T> From<QueryGroup> for Filter<T> {
    fn from(value: QueryGroup) -> Self {
        Filter::Group(value)
    }
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        match self {
            Filter::Expr(expr) => Filter::Expr(expr.clone()),
            Filter::Dynamic(dynamic) => Filter::Dynamic(dynamic.clone()),
            Filter::Json(json) => Filter::Json(json.clone()),
            Filter::Group(group) => Filter::Group(group.clone()),
            Filter::Key(value) => Filter::Key(value.clone()),
        }
    }
}

impl<T> core::fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Filter::Expr(expr) => f.debug_tuple("Expr").field(expr).finish(),
            Filter::Dynamic(dynamic) => f.debug_tuple("Dynamic").field(dynamic).finish(),
            Filter::Json(json) => f.debug_tuple("Json").field(json).finish(),
            Filter::Group(group) => f.debug_tuple("Group").field(group).finish(),
            Filter::Key(value) => f.debug_tuple("Key").field(value).finish(),
        }
    }
}
