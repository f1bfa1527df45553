use super::Error;

/// Error when a predicate expression cannot be compiled.
///
/// This occurs when:
/// - A leaf references a member that is not a mapped property of the entity
/// - A leaf does not reduce to a `property <op> constant` comparison
#[derive(Debug)]
pub(super) struct InvalidExpressionError {
    message: Box<str>,
}

impl std::error::Error for InvalidExpressionError {}

impl core::fmt::Display for InvalidExpressionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid expression: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid expression error.
    pub fn invalid_expression(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidExpression(InvalidExpressionError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid expression error.
    pub fn is_invalid_expression(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidExpression(_)))
    }
}
