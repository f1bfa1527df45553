/// The type of a column, property or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// String type
    String,

    /// Binary data
    Bytes,

    /// A universally unique identifier
    Uuid,

    /// Calendar date without time zone
    Date,

    /// Time of day without time zone
    Time,

    /// Date and time without time zone
    DateTime,

    /// An instant in UTC
    Timestamp,

    /// A type that could not be inferred (e.g., null or an empty list)
    Unknown,
}

impl Type {
    pub fn is_numeric(self) -> bool {
        self.is_integer() || matches!(self, Type::F32 | Type::F64)
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Type::I8
                | Type::I16
                | Type::I32
                | Type::I64
                | Type::U8
                | Type::U16
                | Type::U32
                | Type::U64
        )
    }

    pub fn is_temporal(self) -> bool {
        matches!(
            self,
            Type::Date | Type::Time | Type::DateTime | Type::Timestamp
        )
    }

    /// The Rust name of the type, used in conversion errors.
    pub fn name(self) -> &'static str {
        match self {
            Type::Bool => "bool",
            Type::I8 => "i8",
            Type::I16 => "i16",
            Type::I32 => "i32",
            Type::I64 => "i64",
            Type::U8 => "u8",
            Type::U16 => "u16",
            Type::U32 => "u32",
            Type::U64 => "u64",
            Type::F32 => "f32",
            Type::F64 => "f64",
            Type::String => "String",
            Type::Bytes => "Vec<u8>",
            Type::Uuid => "Uuid",
            Type::Date => "NaiveDate",
            Type::Time => "NaiveTime",
            Type::DateTime => "NaiveDateTime",
            Type::Timestamp => "DateTime<Utc>",
            Type::Unknown => "unknown",
        }
    }
}
