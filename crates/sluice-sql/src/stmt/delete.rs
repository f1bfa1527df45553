use super::hash_filter;
use sluice_core::stmt::QueryGroup;

use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Default)]
pub struct Delete<'a> {
    pub table: &'a str,
    pub filter: Option<&'a QueryGroup>,
    pub hints: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteAll<'a> {
    pub table: &'a str,
    pub hints: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub struct Truncate<'a> {
    pub table: &'a str,
}

impl Delete<'_> {
    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        hash_filter(self.filter, state);
        self.hints.hash(state);
    }
}

impl DeleteAll<'_> {
    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        self.hints.hash(state);
    }
}

impl Truncate<'_> {
    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
    }
}
