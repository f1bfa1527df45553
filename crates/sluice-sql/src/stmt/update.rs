use super::{hash_filter, hash_key, insert::hash_fields, without_key};
use sluice_core::{
    schema::DbField,
    stmt::{Field, QueryGroup},
};

use std::hash::{Hash, Hasher};

/// `UPDATE` of the rows matching `filter`, or of every row when there is no
/// filter.
#[derive(Debug, Clone, Default)]
pub struct Update<'a> {
    pub table: &'a str,

    /// Columns to set. Primary and identity columns are never set.
    pub fields: &'a [Field],

    pub filter: Option<&'a QueryGroup>,
    pub primary: Option<&'a DbField>,
    pub identity: Option<&'a DbField>,
    pub hints: Option<&'a str>,
}

/// `UPDATE` of `batch_size` rows, each matched on the qualifiers.
#[derive(Debug, Clone, Default)]
pub struct UpdateAll<'a> {
    pub table: &'a str,
    pub fields: &'a [Field],
    pub qualifiers: Option<&'a [Field]>,
    pub batch_size: i64,
    pub primary: Option<&'a DbField>,
    pub identity: Option<&'a DbField>,
    pub hints: Option<&'a str>,
}

impl Update<'_> {
    /// The columns in the SET clause: every field except the key columns.
    pub fn fields_to_set(&self) -> Vec<Field> {
        without_key(&without_key(self.fields, self.primary), self.identity)
    }

    /// The filter as rendered: parameters colliding with a SET parameter are
    /// prefixed with `_`.
    pub fn filter(&self) -> Option<QueryGroup> {
        self.filter
            .map(|filter| filter.prefix_colliding(self.fields, "_"))
    }

    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        hash_fields(self.fields, state);
        hash_filter(self.filter, state);
        hash_key(self.primary, state);
        hash_key(self.identity, state);
        self.hints.hash(state);
    }
}

impl UpdateAll<'_> {
    /// The explicit qualifiers, or the primary key when there are none.
    /// Validation happens when the statement is serialized.
    pub fn qualifiers(&self) -> Vec<Field> {
        match (self.qualifiers, self.primary) {
            (Some(qualifiers), _) if !qualifiers.is_empty() => qualifiers.to_vec(),
            (_, Some(primary)) => vec![Field::new(primary.name.as_str())],
            _ => vec![],
        }
    }

    /// The columns in the SET clause: every field except the qualifiers and
    /// the key columns.
    pub fn fields_to_set(&self) -> Vec<Field> {
        let qualifiers = self.qualifiers();
        without_key(&without_key(self.fields, self.primary), self.identity)
            .into_iter()
            .filter(|field| !qualifiers.contains(field))
            .collect()
    }

    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        hash_fields(self.fields, state);
        self.qualifiers.is_some().hash(state);
        hash_fields(self.qualifiers.unwrap_or_default(), state);
        self.batch_size.hash(state);
        hash_key(self.primary, state);
        hash_key(self.identity, state);
        self.hints.hash(state);
    }
}
