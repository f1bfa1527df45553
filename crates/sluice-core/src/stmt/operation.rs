use crate::Error;

use std::str::FromStr;

/// A comparison between a column and a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Like,
    NotLike,
    Between,
    NotBetween,
    In,
    NotIn,

    /// Every nested sub-expression must hold.
    All,

    /// At least one nested sub-expression must hold.
    Any,
}

impl Operation {
    /// The SQL operator. `All` and `Any` expand into a nested group and have
    /// no operator of their own.
    pub fn sql_text(self) -> Option<&'static str> {
        use Operation::*;

        Some(match self {
            Equal => "=",
            NotEqual => "<>",
            LessThan => "<",
            LessThanOrEqual => "<=",
            GreaterThan => ">",
            GreaterThanOrEqual => ">=",
            Like => "LIKE",
            NotLike => "NOT LIKE",
            Between => "BETWEEN",
            NotBetween => "NOT BETWEEN",
            In => "IN",
            NotIn => "NOT IN",
            All | Any => return None,
        })
    }

    /// The operation matching exactly the rows this one rejects.
    pub fn negate(self) -> Operation {
        use Operation::*;

        match self {
            Equal => NotEqual,
            NotEqual => Equal,
            LessThan => GreaterThanOrEqual,
            LessThanOrEqual => GreaterThan,
            GreaterThan => LessThanOrEqual,
            GreaterThanOrEqual => LessThan,
            Like => NotLike,
            NotLike => Like,
            Between => NotBetween,
            NotBetween => Between,
            In => NotIn,
            NotIn => In,
            All => Any,
            Any => All,
        }
    }

    pub fn is_structural(self) -> bool {
        matches!(self, Operation::All | Operation::Any)
    }

    pub fn is_range(self) -> bool {
        matches!(self, Operation::Between | Operation::NotBetween)
    }

    pub fn is_list(self) -> bool {
        matches!(self, Operation::In | Operation::NotIn)
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Operation::*;

        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "equal" | "=" => Equal,
            "notequal" | "<>" | "!=" => NotEqual,
            "lessthan" | "<" => LessThan,
            "lessthanorequal" | "<=" => LessThanOrEqual,
            "greaterthan" | ">" => GreaterThan,
            "greaterthanorequal" | ">=" => GreaterThanOrEqual,
            "like" => Like,
            "notlike" => NotLike,
            "between" => Between,
            "notbetween" => NotBetween,
            "in" => In,
            "notin" => NotIn,
            "all" => All,
            "any" => Any,
            _ => crate::bail!("`{s}` is not an operation"),
        })
    }
}
