use super::Error;
use crate::stmt::Operation;

/// Error when the value given to a structural operation has the wrong shape,
/// e.g. `Between` without a pair or `In` without a list.
#[derive(Debug)]
pub(super) struct InvalidOperationValueError {
    operation: Operation,
    expected: &'static str,
}

impl std::error::Error for InvalidOperationValueError {}

impl core::fmt::Display for InvalidOperationValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid operation value: {:?} requires {}",
            self.operation, self.expected
        )
    }
}

impl Error {
    pub fn invalid_operation_value(operation: Operation, expected: &'static str) -> Error {
        Error::from(super::ErrorKind::InvalidOperationValue(
            InvalidOperationValueError {
                operation,
                expected,
            },
        ))
    }

    pub fn is_invalid_operation_value(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidOperationValue(_)))
    }
}
