use super::Error;

/// Error when a required input is absent.
///
/// Raised when the top-level predicate input (or another mandatory argument)
/// is null, before any compilation takes place.
#[derive(Debug)]
pub(super) struct ArgumentNullError {
    name: Box<str>,
}

impl std::error::Error for ArgumentNullError {}

impl core::fmt::Display for ArgumentNullError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "argument null: {}", self.name)
    }
}

impl Error {
    /// Creates an argument null error for the named argument.
    pub fn argument_null(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ArgumentNull(ArgumentNullError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an argument null error.
    pub fn is_argument_null(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::ArgumentNull(_)))
    }
}
