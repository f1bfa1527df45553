use sluice::{
    err,
    stmt::{Type, Value},
    Reader, Result,
};

/// An in-memory result set.
#[derive(Debug, Clone, Default)]
pub struct VecReader {
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,

    /// Index of the current row, once `read` has been called.
    position: Option<usize>,
}

#[derive(Debug, Clone)]
struct Column {
    name: String,
    ty: Type,
    nullable: Option<bool>,
}

impl VecReader {
    pub fn new<'a>(columns: impl IntoIterator<Item = (&'a str, Type)>) -> VecReader {
        VecReader {
            columns: columns
                .into_iter()
                .map(|(name, ty)| Column {
                    name: name.to_string(),
                    ty,
                    nullable: None,
                })
                .collect(),
            ..VecReader::default()
        }
    }

    /// Reports whether `column` may hold nulls. Unset columns report
    /// nothing.
    pub fn nullable(mut self, column: &str, nullable: bool) -> Self {
        for c in &mut self.columns {
            if c.name == column {
                c.nullable = Some(nullable);
            }
        }
        self
    }

    pub fn row<const N: usize>(mut self, values: [Value; N]) -> Self {
        assert_eq!(N, self.columns.len(), "row width must match the columns");
        self.rows.push(values.into());
        self
    }

    fn current(&self, ordinal: usize) -> Result<&Value> {
        let Some(row) = self.position.and_then(|position| self.rows.get(position)) else {
            return Err(err!("reader is not positioned on a row"));
        };

        row.get(ordinal)
            .ok_or_else(|| err!("column ordinal {ordinal} is out of range"))
    }
}

impl Reader for VecReader {
    fn read(&mut self) -> Result<bool> {
        let next = self.position.map_or(0, |position| position + 1);
        self.position = Some(next.min(self.rows.len()));
        Ok(next < self.rows.len())
    }

    fn field_count(&self) -> usize {
        self.columns.len()
    }

    fn name(&self, ordinal: usize) -> &str {
        &self.columns[ordinal].name
    }

    fn field_type(&self, ordinal: usize) -> Type {
        self.columns[ordinal].ty
    }

    fn is_nullable(&self, ordinal: usize) -> Option<bool> {
        self.columns[ordinal].nullable
    }

    fn is_null(&self, ordinal: usize) -> bool {
        matches!(self.current(ordinal), Ok(Value::Null))
    }

    fn get_value(&self, ordinal: usize) -> Result<Value> {
        self.current(ordinal).cloned()
    }
}
