use crate::stmt::Type;

/// A physical column as reported by the database catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbField {
    /// Column name
    pub name: String,

    /// True if the column is part of the primary key.
    pub is_primary: bool,

    /// True if the database assigns the column's value on insert.
    pub is_identity: bool,

    /// True if the column accepts nulls.
    pub is_nullable: bool,

    /// The Rust-side type the column maps to, if known.
    pub ty: Option<Type>,

    pub size: Option<u32>,

    pub precision: Option<u8>,

    pub scale: Option<u8>,

    /// The database type name, e.g. `NVARCHAR` or `BIGINT`.
    pub database_type: Option<String>,
}

impl DbField {
    /// A nullable column with no key role.
    pub fn new(name: impl Into<String>) -> DbField {
        DbField {
            name: name.into(),
            is_primary: false,
            is_identity: false,
            is_nullable: true,
            ty: None,
            size: None,
            precision: None,
            scale: None,
            database_type: None,
        }
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self.is_nullable = false;
        self
    }

    pub fn identity(mut self) -> Self {
        self.is_identity = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    pub fn ty(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn database_type(mut self, database_type: impl Into<String>) -> Self {
        self.database_type = Some(database_type.into());
        self
    }

    /// The database type including size, precision and scale when known,
    /// e.g. `NVARCHAR(100)` or `DECIMAL(18, 2)`.
    pub fn full_database_type(&self) -> Option<String> {
        let base = self.database_type.as_deref()?;

        Some(match (self.size, self.precision, self.scale) {
            (_, Some(precision), Some(scale)) => format!("{base}({precision}, {scale})"),
            (Some(size), _, _) => format!("{base}({size})"),
            _ => base.to_string(),
        })
    }
}
