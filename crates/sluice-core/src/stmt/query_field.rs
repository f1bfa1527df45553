use super::{Field, Operation, Value};
use crate::{Error, Result};

use std::hash::{Hash, Hasher};

/// A single `column <op> value` predicate.
///
/// The parameter name starts as the column's parameter name and is renamed by
/// the owning [`QueryGroup`](super::QueryGroup) when it collides with another
/// predicate in the same tree.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryField {
    field: Field,
    operation: Operation,
    parameter_name: String,
    value: Value,
}

impl QueryField {
    /// Fails when the value's shape does not fit the operation: ranges need
    /// a list of exactly two values, `In`/`NotIn` need a list and the
    /// structural operations are only valid on a group.
    pub fn new(
        field: impl Into<Field>,
        operation: Operation,
        value: impl Into<Value>,
    ) -> Result<QueryField> {
        let field = field.into();
        let value = value.into();

        match operation {
            Operation::All | Operation::Any => {
                return Err(Error::invalid_operation_value(
                    operation,
                    "a list of structured sub-expressions",
                ));
            }
            Operation::Between | Operation::NotBetween => {
                if !matches!(value.as_list(), Some(items) if items.len() == 2) {
                    return Err(Error::invalid_operation_value(
                        operation,
                        "an ordered pair of values",
                    ));
                }
            }
            Operation::In | Operation::NotIn => {
                if !value.is_list() {
                    return Err(Error::invalid_operation_value(operation, "a list of values"));
                }
            }
            _ => {
                if value.is_list() {
                    return Err(Error::invalid_operation_value(operation, "a single value"));
                }
            }
        }

        Ok(QueryField {
            parameter_name: field.parameter_name(),
            field,
            operation,
            value,
        })
    }

    /// An `Equal` predicate. A list value fails like it does for
    /// [`QueryField::new`].
    pub fn equal(field: impl Into<Field>, value: impl Into<Value>) -> Result<QueryField> {
        QueryField::new(field, Operation::Equal, value)
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    pub(crate) fn set_parameter_name(&mut self, name: String) {
        self.parameter_name = name;
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// True when the predicate renders as `IS NULL` or `IS NOT NULL`.
    pub fn is_null_check(&self) -> bool {
        matches!(self.operation, Operation::Equal | Operation::NotEqual) && self.value.is_null()
    }

    /// Flips the operation to its negation.
    pub fn negate(&mut self) {
        self.operation = self.operation.negate();
    }

    /// Name of the `Between` lower bound parameter.
    pub fn left_parameter_name(&self) -> String {
        format!("{}_Left", self.parameter_name)
    }

    /// Name of the `Between` upper bound parameter.
    pub fn right_parameter_name(&self) -> String {
        format!("{}_Right", self.parameter_name)
    }

    /// Name of the `index`-th `In` list parameter.
    pub fn in_parameter_name(&self, index: usize) -> String {
        format!("{}_In_{index}", self.parameter_name)
    }

    /// The names this predicate occupies when its parameter is named
    /// `base`: the base itself plus every name its bindings derive from it.
    pub(crate) fn reserved_names(&self, base: &str) -> Vec<String> {
        let mut names = vec![base.to_string()];

        if !self.is_null_check() {
            match (&self.value, self.operation) {
                (Value::List(_), op) if op.is_range() => {
                    names.push(format!("{base}_Left"));
                    names.push(format!("{base}_Right"));
                }
                (Value::List(items), op) if op.is_list() => {
                    names.extend((0..items.len()).map(|i| format!("{base}_In_{i}")));
                }
                _ => {}
            }
        }

        names
    }

    /// The parameters this predicate binds, in render order.
    pub fn bindings(&self) -> Vec<(String, Value)> {
        if self.is_null_check() {
            return vec![];
        }

        match (&self.value, self.operation) {
            (Value::List(items), op) if op.is_range() => vec![
                (self.left_parameter_name(), items[0].clone()),
                (self.right_parameter_name(), items[1].clone()),
            ],
            (Value::List(items), op) if op.is_list() => items
                .iter()
                .enumerate()
                .map(|(i, item)| (self.in_parameter_name(i), item.clone()))
                .collect(),
            (value, _) => vec![(self.parameter_name.clone(), value.clone())],
        }
    }

    /// Hashes everything that affects the rendered text. Bound values are
    /// excluded apart from nullness and list length.
    pub fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.operation.hash(state);
        self.parameter_name.hash(state);
        self.value.is_null().hash(state);
        self.value.as_list().map(<[Value]>::len).hash(state);
    }
}
