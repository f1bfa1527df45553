use super::Error;

/// Error when an explicit qualifier is not part of the statement's fields.
#[derive(Debug)]
pub(super) struct InvalidQualifierError {
    qualifier: Box<str>,
    table: Box<str>,
}

impl std::error::Error for InvalidQualifierError {}

impl core::fmt::Display for InvalidQualifierError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid qualifier: `{}` is not among the fields given for table {}",
            self.qualifier, self.table
        )
    }
}

impl Error {
    pub fn invalid_qualifier(qualifier: impl Into<String>, table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidQualifier(InvalidQualifierError {
            qualifier: qualifier.into().into(),
            table: table.into().into(),
        }))
    }

    pub fn is_invalid_qualifier(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidQualifier(_)))
    }
}
