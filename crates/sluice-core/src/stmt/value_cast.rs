use super::{Type, Value};
use crate::{Error, Result};

impl Value {
    /// Converts the value to `ty` using the lossless conversions: numeric
    /// widening and checked narrowing, booleans to and from integers,
    /// strings to and from UUIDs and UTC timestamps to and from naive date
    /// times.
    ///
    /// Null casts to null for every type.
    pub fn cast(self, ty: Type) -> Result<Value> {
        let from = self.infer_ty();

        if self.is_null() || from == ty || ty == Type::Unknown {
            return Ok(self);
        }

        match (self, ty) {
            (value, ty) if from.is_numeric() && ty.is_numeric() => cast_numeric(value, ty),
            (Value::Bool(v), ty) if ty.is_integer() => cast_numeric(Value::I64(v as i64), ty),
            (value, Type::Bool) if from.is_integer() => match integer(&value) {
                Some(0) => Ok(Value::Bool(false)),
                Some(1) => Ok(Value::Bool(true)),
                _ => Err(Error::type_conversion(value, ty.name())),
            },
            (Value::String(v), Type::Uuid) => Ok(Value::Uuid(v.trim().parse()?)),
            (Value::Uuid(v), Type::String) => Ok(Value::String(v.to_string())),
            (Value::Bytes(v), Type::Uuid) if v.len() == 16 => {
                Ok(Value::Uuid(uuid::Uuid::from_slice(&v)?))
            }
            (Value::Timestamp(v), Type::DateTime) => Ok(Value::DateTime(v.naive_utc())),
            (Value::DateTime(v), Type::Timestamp) => Ok(Value::Timestamp(v.and_utc())),
            (Value::DateTime(v), Type::Date) => Ok(Value::Date(v.date())),
            (Value::Date(v), Type::DateTime) => Ok(Value::DateTime(v.and_time(
                chrono::NaiveTime::MIN,
            ))),
            (value, ty) => Err(Error::type_conversion(value, ty.name())),
        }
    }

    /// Converts the value to `ty`, falling back to the value's text when
    /// [`cast`](Self::cast) has no lossless conversion. Strings parse into
    /// any scalar type and any scalar formats into a string.
    pub fn convert(self, ty: Type) -> Result<Value> {
        match self.clone().cast(ty) {
            Ok(value) => Ok(value),
            Err(err) if err.is_type_conversion() => self.parse_as(ty),
            Err(err) => Err(err),
        }
    }

    fn parse_as(self, ty: Type) -> Result<Value> {
        if ty == Type::String && !self.is_list() {
            return Ok(Value::String(self.to_string()));
        }

        let Value::String(text) = &self else {
            return Err(Error::type_conversion(self, ty.name()));
        };
        let text = text.trim();

        Ok(match ty {
            Type::Bool => match text.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Value::Bool(true),
                "false" | "0" | "no" => Value::Bool(false),
                _ => return Err(Error::type_conversion(self, ty.name())),
            },
            Type::I8 => Value::I8(text.parse()?),
            Type::I16 => Value::I16(text.parse()?),
            Type::I32 => Value::I32(text.parse()?),
            Type::I64 => Value::I64(text.parse()?),
            Type::U8 => Value::U8(text.parse()?),
            Type::U16 => Value::U16(text.parse()?),
            Type::U32 => Value::U32(text.parse()?),
            Type::U64 => Value::U64(text.parse()?),
            Type::F32 => Value::F32(text.parse()?),
            Type::F64 => Value::F64(text.parse()?),
            Type::Uuid => Value::Uuid(text.parse()?),
            Type::Date => Value::Date(text.parse()?),
            Type::Time => Value::Time(text.parse()?),
            Type::DateTime => Value::DateTime(text.parse()?),
            Type::Timestamp => Value::Timestamp(text.parse()?),
            Type::String | Type::Unknown => self,
            Type::Bytes => Value::Bytes(text.as_bytes().to_vec()),
        })
    }
}

fn integer(value: &Value) -> Option<i128> {
    Some(match *value {
        Value::I8(v) => v as i128,
        Value::I16(v) => v as i128,
        Value::I32(v) => v as i128,
        Value::I64(v) => v as i128,
        Value::U8(v) => v as i128,
        Value::U16(v) => v as i128,
        Value::U32(v) => v as i128,
        Value::U64(v) => v as i128,
        _ => return None,
    })
}

fn cast_numeric(value: Value, ty: Type) -> Result<Value> {
    let n = match integer(&value) {
        Some(n) => n,
        None => {
            let f = match value {
                Value::F32(v) => v as f64,
                Value::F64(v) => v,
                _ => return Err(Error::type_conversion(value, ty.name())),
            };

            match ty {
                Type::F32 => return Ok(Value::F32(f as f32)),
                Type::F64 => return Ok(Value::F64(f)),
                _ if f.fract() != 0.0 || !f.is_finite() => {
                    return Err(Error::type_conversion(value, ty.name()));
                }
                _ => f as i128,
            }
        }
    };

    let narrowed = match ty {
        Type::I8 => i8::try_from(n).ok().map(Value::I8),
        Type::I16 => i16::try_from(n).ok().map(Value::I16),
        Type::I32 => i32::try_from(n).ok().map(Value::I32),
        Type::I64 => i64::try_from(n).ok().map(Value::I64),
        Type::U8 => u8::try_from(n).ok().map(Value::U8),
        Type::U16 => u16::try_from(n).ok().map(Value::U16),
        Type::U32 => u32::try_from(n).ok().map(Value::U32),
        Type::U64 => u64::try_from(n).ok().map(Value::U64),
        Type::F32 => Some(Value::F32(n as f32)),
        Type::F64 => Some(Value::F64(n as f64)),
        _ => None,
    };

    narrowed.ok_or_else(|| Error::type_conversion(value, ty.name()))
}
