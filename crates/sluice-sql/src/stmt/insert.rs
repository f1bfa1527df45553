use super::{hash_key, without_key};
use sluice_core::{schema::DbField, stmt::Field};

use std::hash::{Hash, Hasher};

/// `INSERT` of one row, returning the generated or bound key.
#[derive(Debug, Clone, Default)]
pub struct Insert<'a> {
    pub table: &'a str,

    /// Columns to insert. The identity column, if listed, is skipped.
    pub fields: &'a [Field],

    pub primary: Option<&'a DbField>,

    pub identity: Option<&'a DbField>,

    pub hints: Option<&'a str>,
}

/// `INSERT` of `batch_size` rows in one command. Every parameter is suffixed
/// with the row index.
#[derive(Debug, Clone, Default)]
pub struct InsertAll<'a> {
    pub table: &'a str,
    pub fields: &'a [Field],
    pub batch_size: i64,
    pub primary: Option<&'a DbField>,
    pub identity: Option<&'a DbField>,
    pub hints: Option<&'a str>,
}

impl Insert<'_> {
    /// The columns the statement binds: every field except the identity.
    pub fn fields_to_insert(&self) -> Vec<Field> {
        without_key(self.fields, self.identity)
    }

    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        hash_fields(self.fields, state);
        hash_key(self.primary, state);
        hash_key(self.identity, state);
        self.hints.hash(state);
    }
}

impl InsertAll<'_> {
    /// The columns each row binds: every field except the identity.
    pub fn fields_to_insert(&self) -> Vec<Field> {
        without_key(self.fields, self.identity)
    }

    /// Whether each row selects its key back, together with the
    /// `__OrderColumn` parameter.
    pub fn returns_key(&self) -> bool {
        self.identity.is_some()
            || self
                .primary
                .is_some_and(|primary| self.fields.iter().any(|f| f.is_named(&primary.name)))
    }

    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        hash_fields(self.fields, state);
        self.batch_size.hash(state);
        hash_key(self.primary, state);
        hash_key(self.identity, state);
        self.hints.hash(state);
    }
}

pub(super) fn hash_fields<H: Hasher>(fields: &[Field], state: &mut H) {
    fields.len().hash(state);
    for field in fields {
        field.name().hash(state);
    }
}
