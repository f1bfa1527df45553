use super::Error;

/// Error when a merge or batched update has neither explicit qualifiers nor a
/// primary key to fall back on.
#[derive(Debug)]
pub(super) struct MissingQualifierError {
    table: Box<str>,
}

impl std::error::Error for MissingQualifierError {}

impl core::fmt::Display for MissingQualifierError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing qualifier: no qualifiers were given and table {} has no primary key",
            self.table
        )
    }
}

impl Error {
    pub fn missing_qualifier(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingQualifier(MissingQualifierError {
            table: table.into().into(),
        }))
    }

    pub fn is_missing_qualifier(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingQualifier(_)))
    }
}
