use super::Error;

/// Error when an explicit mapping is registered twice for the same type.
///
/// Mappings are write-once: the second registration only succeeds when the
/// first one was declared overridable or the second one is forced.
#[derive(Debug)]
pub(super) struct MappingExistsError {
    type_name: Box<str>,
    kind: &'static str,
    value: Box<str>,
}

impl std::error::Error for MappingExistsError {}

impl core::fmt::Display for MappingExistsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "mapping already exists: {} mapping for type `{}` is already defined; attempted value `{}`",
            self.kind, self.type_name, self.value
        )
    }
}

impl Error {
    /// Creates a mapping exists error.
    ///
    /// `kind` names the mapping (e.g. `table`, `primary`) and `value` is the
    /// value the caller attempted to register.
    pub fn mapping_exists(
        type_name: impl Into<String>,
        kind: &'static str,
        value: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MappingExists(MappingExistsError {
            type_name: type_name.into().into(),
            kind,
            value: value.into().into(),
        }))
    }

    pub fn is_mapping_exists(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MappingExists(_)))
    }
}
