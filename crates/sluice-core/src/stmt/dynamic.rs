use super::Criterion;
use crate::{Error, Result};

use indexmap::IndexMap;

/// A plain key to value object used as a predicate, one predicate per key.
///
/// Keys keep their insertion order, which is the order predicates render in.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dynamic {
    entries: IndexMap<String, Criterion>,
}

impl Dynamic {
    pub fn new() -> Dynamic {
        Dynamic::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, criterion: impl Into<Criterion>) {
        self.entries.insert(key.into(), criterion.into());
    }

    pub fn with(mut self, key: impl Into<String>, criterion: impl Into<Criterion>) -> Self {
        self.insert(key, criterion);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Criterion> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Criterion)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parses a JSON object. `null` fails with an argument null error and
    /// every other non-object value with an invalid expression error.
    pub fn from_json(json: &serde_json::Value) -> Result<Dynamic> {
        let object = match json {
            serde_json::Value::Null => return Err(Error::argument_null("where")),
            serde_json::Value::Object(object) => object,
            other => {
                return Err(Error::invalid_expression(format!(
                    "expected a JSON object, got {other}"
                )))
            }
        };

        let mut dynamic = Dynamic::new();
        for (key, value) in object {
            let criterion = Criterion::from_json(value)
                .map_err(|err| err.context(crate::err!("invalid criterion for `{key}`")))?;
            dynamic.insert(key.as_str(), criterion);
        }
        Ok(dynamic)
    }
}

impl<K: Into<String>, C: Into<Criterion>> FromIterator<(K, C)> for Dynamic {
    fn from_iter<T: IntoIterator<Item = (K, C)>>(iter: T) -> Self {
        let mut dynamic = Dynamic::new();
        for (key, criterion) in iter {
            dynamic.insert(key, criterion);
        }
        dynamic
    }
}
