use super::Error;

/// Error when a numeric paging or batching argument is below its minimum.
#[derive(Debug)]
pub(super) struct OutOfRangeError {
    name: &'static str,
    value: i64,
    min: i64,
}

impl std::error::Error for OutOfRangeError {}

impl core::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "out of range: `{}` must be greater than or equal to {}, got {}",
            self.name, self.min, self.value
        )
    }
}

impl Error {
    pub fn out_of_range(name: &'static str, value: i64, min: i64) -> Error {
        Error::from(super::ErrorKind::OutOfRange(OutOfRangeError {
            name,
            value,
            min,
        }))
    }

    pub fn is_out_of_range(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::OutOfRange(_)))
    }
}
