use super::hash_filter;
use sluice_core::stmt::{Field, QueryGroup};

use std::hash::{Hash, Hasher};

/// An aggregate over one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Min,
    Max,
    Sum,
    Average,
}

impl Function {
    /// Name of the result column, e.g. `MinValue`.
    pub fn alias(self) -> &'static str {
        match self {
            Function::Min => "MinValue",
            Function::Max => "MaxValue",
            Function::Sum => "SumValue",
            Function::Average => "AverageValue",
        }
    }

    pub fn sql_text(self) -> &'static str {
        match self {
            Function::Min => "MIN",
            Function::Max => "MAX",
            Function::Sum => "SUM",
            Function::Average => "AVG",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Aggregate<'a> {
    pub function: Function,
    pub table: &'a str,
    pub field: &'a Field,
    pub filter: Option<&'a QueryGroup>,
    pub hints: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub struct Count<'a> {
    pub table: &'a str,
    pub filter: Option<&'a QueryGroup>,
    pub hints: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub struct CountAll<'a> {
    pub table: &'a str,
    pub hints: Option<&'a str>,
}

/// Whether any row matches `filter`.
#[derive(Debug, Clone, Default)]
pub struct Exists<'a> {
    pub table: &'a str,
    pub filter: Option<&'a QueryGroup>,
    pub hints: Option<&'a str>,
}

impl Aggregate<'_> {
    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.function.hash(state);
        self.table.hash(state);
        self.field.name().hash(state);
        hash_filter(self.filter, state);
        self.hints.hash(state);
    }
}

impl Count<'_> {
    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        hash_filter(self.filter, state);
        self.hints.hash(state);
    }
}

impl CountAll<'_> {
    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        self.hints.hash(state);
    }
}

impl Exists<'_> {
    pub(crate) fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.table.hash(state);
        hash_filter(self.filter, state);
        self.hints.hash(state);
    }
}
