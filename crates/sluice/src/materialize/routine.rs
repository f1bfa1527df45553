use crate::{
    registry::{Conversion, EntityMeta},
    Entity,
};

use sluice_core::{
    driver::Reader,
    err,
    stmt::{Type, Value},
    Error, Result,
};

/// Reads rows of one column signature into `T`.
///
/// Built once per `(T, signature)`: each step knows its column ordinal, the
/// getter for the column's type, whether a conversion to the property type
/// is needed and whether the column can hold nulls.
pub struct Routine<T> {
    signature: Vec<String>,
    steps: Vec<Step<T>>,
}

struct Step<T> {
    ordinal: usize,
    property: &'static str,
    getter: Getter,

    /// Target type, when the column type differs from the property's.
    convert: Option<Type>,
    conversion: Conversion,

    /// The column may hold nulls. Unknown nullability counts as nullable.
    nullable: bool,

    /// The property is an `Option<_>`.
    optional: bool,

    set: fn(&mut T, Value) -> Result<()>,
}

/// The narrowest reader getter for a column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Getter {
    Bool,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
    Uuid,
    Bytes,
    DateTime,
    Value,
}

impl<T: Entity> Routine<T> {
    pub(crate) fn compile<R: Reader + ?Sized>(
        meta: &EntityMeta,
        reader: &R,
        conversion: Conversion,
    ) -> Result<Routine<T>> {
        let signature = reader.signature();
        let mut steps = vec![];

        for property in meta.properties() {
            let column = property.field();
            let Some(ordinal) = signature.iter().position(|name| column.is_named(name)) else {
                continue;
            };

            let column_ty = reader.field_type(ordinal);
            let convert = (column_ty != Type::Unknown && column_ty != property.ty())
                .then_some(property.ty());

            steps.push(Step {
                ordinal,
                property: property.name(),
                getter: Getter::for_type(column_ty),
                convert,
                conversion,
                nullable: reader.is_nullable(ordinal).unwrap_or(true),
                optional: property.nullable(),
                set: T::properties()[property.index].set,
            });
        }

        if steps.is_empty() {
            return Err(Error::no_matched_fields(T::NAME, &signature));
        }

        tracing::debug!(
            entity = T::NAME,
            columns = signature.len(),
            matched = steps.len(),
            ?conversion,
            "compiled routine"
        );

        Ok(Routine { signature, steps })
    }

    /// Reads the reader's current row.
    pub fn read<R: Reader + ?Sized>(&self, reader: &R) -> Result<T> {
        let mut entity = T::default();

        for step in &self.steps {
            step.apply(reader, &mut entity).map_err(|cause| {
                cause.context(err!(
                    "cannot read column `{}` into {}.{}",
                    self.signature[step.ordinal],
                    T::NAME,
                    step.property
                ))
            })?;
        }

        Ok(entity)
    }
}

impl<T> Routine<T> {
    /// The column names this routine was built for.
    pub fn signature(&self) -> &[String] {
        &self.signature
    }

    /// The columns that map to a property, in property order.
    pub fn matched_columns(&self) -> Vec<&str> {
        self.steps
            .iter()
            .map(|step| self.signature[step.ordinal].as_str())
            .collect()
    }
}

impl<T> Step<T> {
    fn apply<R: Reader + ?Sized>(&self, reader: &R, entity: &mut T) -> Result<()> {
        if self.nullable && reader.is_null(self.ordinal) {
            if self.optional {
                (self.set)(entity, Value::Null)?;
            }
            return Ok(());
        }

        let mut value = self.getter.read(reader, self.ordinal)?;

        if let Some(ty) = self.convert {
            value = match self.conversion {
                Conversion::Default => value.cast(ty)?,
                Conversion::Automatic => value.convert(ty)?,
            };
        }

        (self.set)(entity, value)
    }
}

impl Getter {
    fn for_type(ty: Type) -> Getter {
        match ty {
            Type::Bool => Getter::Bool,
            Type::I16 => Getter::I16,
            Type::I32 => Getter::I32,
            Type::I64 => Getter::I64,
            Type::F32 => Getter::F32,
            Type::F64 => Getter::F64,
            Type::String => Getter::String,
            Type::Uuid => Getter::Uuid,
            Type::Bytes => Getter::Bytes,
            Type::DateTime => Getter::DateTime,
            _ => Getter::Value,
        }
    }

    fn read<R: Reader + ?Sized>(self, reader: &R, ordinal: usize) -> Result<Value> {
        Ok(match self {
            Getter::Bool => reader.get_bool(ordinal)?.into(),
            Getter::I16 => reader.get_i16(ordinal)?.into(),
            Getter::I32 => reader.get_i32(ordinal)?.into(),
            Getter::I64 => reader.get_i64(ordinal)?.into(),
            Getter::F32 => reader.get_f32(ordinal)?.into(),
            Getter::F64 => reader.get_f64(ordinal)?.into(),
            Getter::String => reader.get_string(ordinal)?.into(),
            Getter::Uuid => reader.get_uuid(ordinal)?.into(),
            Getter::Bytes => reader.get_bytes(ordinal)?.into(),
            Getter::DateTime => reader.get_date_time(ordinal)?.into(),
            Getter::Value => reader.get_value(ordinal)?,
        })
    }
}

impl<T> core::fmt::Debug for Routine<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Routine")
            .field("signature", &self.signature)
            .field("matched", &self.matched_columns())
            .finish()
    }
}
