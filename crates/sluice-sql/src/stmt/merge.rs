use super::{hash_key, insert::hash_fields};
use sluice_core::{schema::DbField, stmt::Field};

use std::hash::{Hash, Hasher};

/// Insert-or-update of one row, matched on the qualifiers.
///
/// When `qualifiers` is `None` the primary key is used.
#[derive(Debug, Clone, Default)]
pub struct Merge<'a> {
    pub table: &'a str,
    pub fields: &'a [Field],
    pub qualifiers: Option<&'a [Field]>,
    pub primary: Option<&'a DbField>,
    pub identity: Option<&'a DbField>,
    pub hints: Option<&'a str>,
}

/// Insert-or-update of `batch_size` rows in one command.
#[derive(Debug, Clone, Default)]
pub struct MergeAll<'a> {
    pub table: &'a str,
    pub fields: &'a [Field],
    pub qualifiers: Option<&'a [Field]>,
    pub batch_size: i64,
    pub primary: Option<&'a DbField>,
    pub identity: Option<&'a DbField>,
    pub hints: Option<&'a str>,
}

impl Merge<'_> {
    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        hash_fields(self.fields, state);
        self.qualifiers.is_some().hash(state);
        hash_fields(self.qualifiers.unwrap_or_default(), state);
        hash_key(self.primary, state);
        hash_key(self.identity, state);
        self.hints.hash(state);
    }
}

impl MergeAll<'_> {
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
