use crate::Error;

use std::str::FromStr;

/// Sort direction of an [`OrderField`](super::OrderField).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    pub fn sql_text(self) -> &'static str {
        match self {
            Order::Ascending => "ASC",
            Order::Descending => "DESC",
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Order::Ascending
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Order::Ascending),
            "desc" | "descending" => Ok(Order::Descending),
            _ => Err(crate::err!("`{s}` is not a sort direction")),
        }
    }
}
