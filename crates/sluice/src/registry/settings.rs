use sluice_core::Dialect;

use serde::Deserialize;

/// Registry-wide settings.
///
/// Deserializable so they can come from a configuration file; every field
/// has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
    /// Dialect used by [`Registry::commands`](crate::Registry::commands).
    pub dialect: Dialect,

    /// How materialized values are converted to property types.
    pub conversion: Conversion,

    /// Whether rendered statement text is cached by shape.
    pub statement_cache: bool,
}

/// How a column value is converted when its type differs from the
/// property's.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conversion {
    /// Numeric widening and checked narrowing, bool/integer, string/uuid and
    /// timestamp conversions.
    #[default]
    Default,

    /// Everything `Default` does, falling back to formatting and parsing
    /// text.
    Automatic,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            dialect: Dialect::default(),
            conversion: Conversion::default(),
            statement_cache: true,
        }
    }
}
