use sluice_core::{
    stmt::{Type, Value},
    Result,
};

/// A property type stored in a single column.
pub trait Primitive: Sized {
    const TYPE: Type;

    /// `true` for `Option<_>`, whose null reads set `None`.
    const NULLABLE: bool = false;

    /// The type compared against in predicates: `T` for both `T` and
    /// `Option<T>`.
    type Scalar: Primitive;

    fn load(value: Value) -> Result<Self>;

    fn into_value(self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;

                type Scalar = Self;

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }

                fn into_value(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    uuid::Uuid => Uuid,
    chrono::NaiveDate => Date,
    chrono::NaiveTime => Time,
    chrono::NaiveDateTime => DateTime,
    chrono::DateTime<chrono::Utc> => Timestamp,
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    type Scalar = T::Scalar;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}
