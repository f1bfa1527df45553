use super::Error;

/// Error when none of a result set's columns match a property of the target
/// type.
///
/// This signals a projection mismatch (the caller materialized into the wrong
/// type), not a database failure.
#[derive(Debug)]
pub(super) struct NoMatchedFieldsError {
    type_name: Box<str>,
    columns: Box<[Box<str>]>,
}

impl std::error::Error for NoMatchedFieldsError {}

impl core::fmt::Display for NoMatchedFieldsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no matched fields: none of the columns [")?;
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(column)?;
        }
        write!(f, "] match a property of `{}`", self.type_name)
    }
}

impl Error {
    pub fn no_matched_fields(type_name: impl Into<String>, columns: &[impl AsRef<str>]) -> Error {
        Error::from(super::ErrorKind::NoMatchedFields(NoMatchedFieldsError {
            type_name: type_name.into().into(),
            columns: columns.iter().map(|c| c.as_ref().into()).collect(),
        }))
    }

    pub fn is_no_matched_fields(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NoMatchedFields(_)))
    }
}
