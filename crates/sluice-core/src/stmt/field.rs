use super::Type;

use std::hash::{Hash, Hasher};

const QUOTES: &[char] = &['[', ']', '"', '`'];

/// A reference to a column.
///
/// Two fields are equal when their names match ignoring case and identifier
/// quotes, so `[Name]`, `"name"` and `NAME` all refer to the same column.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: Option<Type>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Field {
        Field {
            name: name.into(),
            ty: None,
        }
    }

    pub fn with_type(name: impl Into<String>, ty: Type) -> Field {
        Field {
            name: name.into(),
            ty: Some(ty),
        }
    }

    pub fn from_names<I>(names: I) -> Vec<Field>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        names.into_iter().map(Field::new).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Option<Type> {
        self.ty
    }

    /// The name with identifier quotes removed.
    pub fn unquoted(&self) -> String {
        unquote(&self.name)
    }

    /// The name as a parameter identifier: quotes removed and every
    /// character that is not alphanumeric or `_` replaced with `_`.
    pub fn parameter_name(&self) -> String {
        self.unquoted()
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
            .collect()
    }

    pub fn is_named(&self, name: &str) -> bool {
        normalized(&self.name).eq(normalized(name))
    }

    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }
}

pub(crate) fn unquote(name: &str) -> String {
    name.trim().chars().filter(|c| !QUOTES.contains(c)).collect()
}

fn normalized(name: &str) -> impl Iterator<Item = char> + '_ {
    name.trim()
        .chars()
        .filter(|c| !QUOTES.contains(c))
        .flat_map(char::to_lowercase)
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.is_named(&other.name)
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in normalized(&self.name) {
            c.hash(state);
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::new(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field::new(name)
    }
}

impl From<&Field> for Field {
    fn from(field: &Field) -> Self {
        field.clone()
    }
}
