use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::Type;
use crate::{stmt::Value, Error};

macro_rules! impl_chrono_conversions {
    ($chrono:ty, $name:ident) => {
        impl From<$chrono> for Value {
            fn from(value: $chrono) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $chrono {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value.cast(Type::$name)? {
                    Value::$name(value) => Ok(value),
                    other => Err(Error::type_conversion(other, Type::$name.name())),
                }
            }
        }
    };
}

impl_chrono_conversions!(DateTime<Utc>, Timestamp);
impl_chrono_conversions!(NaiveDateTime, DateTime);
impl_chrono_conversions!(NaiveDate, Date);
impl_chrono_conversions!(NaiveTime, Time);
