use super::{Conjunction, Criterion, Dynamic, Field, Operation, QueryField, Value};
use crate::{Error, Result};

use std::{
    collections::{HashMap, HashSet},
    hash::{Hash, Hasher},
};

/// A tree of predicates combined by a conjunction.
///
/// Parameter names are unique across the whole tree: the first predicate on a
/// column keeps the column's name and every later one is suffixed `_1`, `_2`,
/// ... in depth-first order (a group's own fields before its child groups).
/// Names derived by range and list bindings count as taken too.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryGroup {
    conjunction: Conjunction,
    fields: Vec<QueryField>,
    groups: Vec<QueryGroup>,
    is_not: bool,
}

impl QueryGroup {
    /// A conjunction of `fields`.
    pub fn new(fields: impl IntoIterator<Item = QueryField>) -> QueryGroup {
        QueryGroup::with(Conjunction::And, fields, [])
    }

    pub fn with(
        conjunction: Conjunction,
        fields: impl IntoIterator<Item = QueryField>,
        groups: impl IntoIterator<Item = QueryGroup>,
    ) -> QueryGroup {
        let mut group = QueryGroup {
            conjunction,
            fields: fields.into_iter().collect(),
            groups: groups.into_iter().collect(),
            is_not: false,
        };
        group.fix();
        group
    }

    /// An `AND` of equality predicates, one per `(column, value)` pair.
    /// Fails when a value is a list.
    pub fn equal<I, K, V>(pairs: I) -> Result<QueryGroup>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Field>,
        V: Into<Value>,
    {
        let fields = pairs
            .into_iter()
            .map(|(field, value)| QueryField::equal(field, value))
            .collect::<Result<Vec<_>>>()?;
        Ok(QueryGroup::new(fields))
    }

    /// Builds a group from a dynamic object, one predicate per key.
    pub fn parse(dynamic: &Dynamic) -> Result<QueryGroup> {
        let mut fields = vec![];
        let mut groups = vec![];

        for (name, criterion) in dynamic.iter() {
            match criterion {
                Criterion::Value(value) => {
                    fields.push(QueryField::new(name, Operation::Equal, value.clone())?)
                }
                Criterion::Operation(operation, value) => {
                    fields.push(QueryField::new(name, *operation, value.clone())?)
                }
                Criterion::All(_) | Criterion::Any(_) => {
                    // A structural criterion becomes a wrapper holding exactly
                    // one child group.
                    let child = expand(name, criterion)?;
                    groups.push(QueryGroup {
                        groups: vec![child],
                        ..QueryGroup::default()
                    });
                }
            }
        }

        Ok(QueryGroup::with(Conjunction::And, fields, groups))
    }

    /// Builds a group from a JSON object. A JSON `null` fails with an
    /// argument null error.
    pub fn parse_json(json: &serde_json::Value) -> Result<QueryGroup> {
        QueryGroup::parse(&Dynamic::from_json(json)?)
    }

    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    pub fn fields(&self) -> &[QueryField] {
        &self.fields
    }

    pub fn groups(&self) -> &[QueryGroup] {
        &self.groups
    }

    pub fn is_not(&self) -> bool {
        self.is_not
    }

    /// Negates the whole group.
    pub fn not(mut self) -> QueryGroup {
        self.is_not = !self.is_not;
        self
    }

    /// True when the tree holds no predicates.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.groups.iter().all(QueryGroup::is_empty)
    }

    /// Every predicate in the tree, depth first.
    pub fn all_fields(&self) -> Vec<&QueryField> {
        let mut out = vec![];
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a QueryField>) {
        out.extend(self.fields.iter());
        for group in &self.groups {
            group.collect(out);
        }
    }

    /// Every parameter the tree binds, depth first.
    pub fn bindings(&self) -> Vec<(String, Value)> {
        self.all_fields()
            .into_iter()
            .flat_map(QueryField::bindings)
            .collect()
    }

    /// Re-derives the parameter names of every predicate in the tree.
    pub fn fix(&mut self) {
        let mut used = HashSet::new();
        let mut counters = HashMap::new();
        self.fix_names(&mut used, &mut counters);
    }

    fn fix_names(&mut self, used: &mut HashSet<String>, counters: &mut HashMap<String, usize>) {
        for field in &mut self.fields {
            let base = field.field().parameter_name();
            let is_free = |name: &str| {
                field
                    .reserved_names(name)
                    .iter()
                    .all(|reserved| !used.contains(&reserved.to_lowercase()))
            };

            let name = if is_free(&base) {
                base
            } else {
                let counter = counters.entry(base.to_lowercase()).or_insert(0);
                loop {
                    *counter += 1;
                    let candidate = format!("{base}_{counter}");
                    if is_free(&candidate) {
                        break candidate;
                    }
                }
            };

            used.extend(
                field
                    .reserved_names(&name)
                    .into_iter()
                    .map(|reserved| reserved.to_lowercase()),
            );
            field.set_parameter_name(name);
        }

        for group in &mut self.groups {
            group.fix_names(used, counters);
        }
    }

    /// Prefixes with `prefix` the parameter names that collide with the
    /// parameters of `fields`. Used by update statements, whose SET clause
    /// binds the column names themselves.
    pub fn prefix_colliding(&self, fields: &[Field], prefix: &str) -> QueryGroup {
        let taken: HashSet<String> = fields
            .iter()
            .map(|field| field.parameter_name().to_lowercase())
            .collect();

        let mut group = self.clone();
        group.prefix_names(&taken, prefix);
        group
    }

    fn prefix_names(&mut self, taken: &HashSet<String>, prefix: &str) {
        for field in &mut self.fields {
            if taken.contains(&field.parameter_name().to_lowercase()) {
                let name = format!("{prefix}{}", field.parameter_name());
                field.set_parameter_name(name);
            }
        }

        for group in &mut self.groups {
            group.prefix_names(taken, prefix);
        }
    }

    /// Hashes everything that affects the rendered text, leaving out bound
    /// values.
    pub fn hash_shape<H: Hasher>(&self, state: &mut H) {
        self.conjunction.hash(state);
        self.is_not.hash(state);
        self.fields.len().hash(state);
        for field in &self.fields {
            field.hash_shape(state);
        }
        self.groups.len().hash(state);
        for group in &self.groups {
            group.hash_shape(state);
        }
    }
}

fn expand(name: &str, criterion: &Criterion) -> Result<QueryGroup> {
    let (conjunction, operation, items) = match criterion {
        Criterion::All(items) => (Conjunction::And, Operation::All, items),
        Criterion::Any(items) => (Conjunction::Or, Operation::Any, items),
        _ => unreachable!("only structural criteria expand"),
    };

    if items.is_empty() {
        return Err(Error::invalid_operation_value(
            operation,
            "a list of structured sub-expressions",
        ));
    }

    let mut fields = vec![];
    let mut groups = vec![];

    for item in items {
        match item {
            Criterion::Operation(operation, value) => {
                fields.push(QueryField::new(name, *operation, value.clone())?)
            }
            Criterion::All(_) | Criterion::Any(_) => groups.push(expand(name, item)?),
            Criterion::Value(_) => {
                return Err(Error::invalid_operation_value(
                    operation,
                    "a list of structured sub-expressions",
                ));
            }
        }
    }

    Ok(QueryGroup {
        conjunction,
        fields,
        groups,
        is_not: false,
    })
}

impl From<QueryField> for QueryGroup {
    fn from(field: QueryField) -> Self {
        QueryGroup::new([field])
    }
}
