use super::Error;

/// Error when a statement is missing a required, non-empty argument.
#[derive(Debug)]
pub(super) struct EmptyArgumentError {
    pub(super) what: EmptyArgument,
    pub(super) context: Box<str>,
}

#[derive(Debug, PartialEq, Eq)]
pub(super) enum EmptyArgument {
    TableName,
    Fields,
    OrderBy,
}

impl std::error::Error for EmptyArgumentError {}

impl core::fmt::Display for EmptyArgumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.what {
            EmptyArgument::TableName => f.write_str("empty argument: the table name is empty"),
            EmptyArgument::Fields => write!(
                f,
                "empty argument: {} requires at least one field",
                self.context
            ),
            EmptyArgument::OrderBy => write!(
                f,
                "empty argument: {} requires at least one order-by field",
                self.context
            ),
        }
    }
}

impl Error {
    /// Creates an error for an empty or whitespace-only table name.
    pub fn empty_table_name() -> Error {
        Error::from(super::ErrorKind::EmptyArgument(EmptyArgumentError {
            what: EmptyArgument::TableName,
            context: "".into(),
        }))
    }

    /// Creates an error for a statement that requires fields but got none.
    pub fn empty_fields(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EmptyArgument(EmptyArgumentError {
            what: EmptyArgument::Fields,
            context: context.into().into(),
        }))
    }

    /// Creates an error for a statement that requires ordering but got none.
    pub fn empty_order_by(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EmptyArgument(EmptyArgumentError {
            what: EmptyArgument::OrderBy,
            context: context.into().into(),
        }))
    }

    pub fn is_empty_table_name(&self) -> bool {
        self.is_empty_argument(EmptyArgument::TableName)
    }

    pub fn is_empty_fields(&self) -> bool {
        self.is_empty_argument(EmptyArgument::Fields)
    }

    pub fn is_empty_order_by(&self) -> bool {
        self.is_empty_argument(EmptyArgument::OrderBy)
    }

    fn is_empty_argument(&self, what: EmptyArgument) -> bool {
        self.any_kind(|kind| {
            matches!(kind, super::ErrorKind::EmptyArgument(err) if err.what == what)
        })
    }
}
