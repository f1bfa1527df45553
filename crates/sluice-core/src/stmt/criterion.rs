use super::{Operation, Value};
use crate::{Error, Result};

/// The right-hand side of one key in a [`Dynamic`](super::Dynamic) object.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// A plain value, compared for equality.
    Value(Value),

    /// An explicit operation and its value.
    Operation(Operation, Value),

    /// Every nested criterion must hold.
    All(Vec<Criterion>),

    /// At least one nested criterion must hold.
    Any(Vec<Criterion>),
}

impl Criterion {
    pub fn op(operation: Operation, value: impl Into<Value>) -> Criterion {
        Criterion::Operation(operation, value.into())
    }

    pub fn between(low: impl Into<Value>, high: impl Into<Value>) -> Criterion {
        Criterion::Operation(Operation::Between, Value::List(vec![low.into(), high.into()]))
    }

    pub fn in_list(items: impl IntoIterator<Item = impl Into<Value>>) -> Criterion {
        Criterion::Operation(Operation::In, Value::list(items))
    }

    pub fn all(items: impl IntoIterator<Item = Criterion>) -> Criterion {
        Criterion::All(items.into_iter().collect())
    }

    pub fn any(items: impl IntoIterator<Item = Criterion>) -> Criterion {
        Criterion::Any(items.into_iter().collect())
    }

    /// Parses a JSON criterion: either a scalar (or list) value, or an object
    /// with `operation` and `value` keys, matched case-insensitively.
    pub fn from_json(json: &serde_json::Value) -> Result<Criterion> {
        let serde_json::Value::Object(object) = json else {
            return Ok(Criterion::Value(Value::from_json(json)?));
        };

        let get = |key: &str| {
            object
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        };

        let (Some(operation), Some(value)) = (get("operation"), get("value")) else {
            crate::bail!("expected an object with `operation` and `value` keys, got {json}");
        };

        let operation: Operation = match operation {
            serde_json::Value::String(s) => s.parse()?,
            other => crate::bail!("`{other}` is not an operation"),
        };

        if !operation.is_structural() {
            return Ok(Criterion::Operation(operation, Value::from_json(value)?));
        }

        let serde_json::Value::Array(items) = value else {
            return Err(Error::invalid_operation_value(
                operation,
                "a list of structured sub-expressions",
            ));
        };

        let items = items
            .iter()
            .map(|item| {
                if !item.is_object() {
                    return Err(Error::invalid_operation_value(
                        operation,
                        "a list of structured sub-expressions",
                    ));
                }
                Criterion::from_json(item)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(match operation {
            Operation::All => Criterion::All(items),
            _ => Criterion::Any(items),
        })
    }
}

macro_rules! impl_from_value {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl From<$ty> for Criterion {
                fn from(value: $ty) -> Self {
                    Criterion::Value(value.into())
                }
            }
        )*
    };
}

impl_from_value! {
    Value,
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    &str,
    &String,
    Vec<u8>,
    uuid::Uuid,
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
}

impl<T: Into<Value>> From<Option<T>> for Criterion {
    fn from(value: Option<T>) -> Self {
        Criterion::Value(value.into())
    }
}
