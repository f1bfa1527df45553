use crate::{
    stmt::{Type, Value},
    Result,
};

/// A forward-only cursor over the rows of a result set.
///
/// Implemented by the execution layer. Columns are addressed by ordinal; the
/// cursor is positioned before the first row until [`read`](Self::read) is
/// called.
pub trait Reader {
    /// Advances to the next row, returning `false` once the rows are exhausted.
    fn read(&mut self) -> Result<bool>;

    fn field_count(&self) -> usize;

    fn name(&self, ordinal: usize) -> &str;

    fn field_type(&self, ordinal: usize) -> Type;

    /// Whether the column may hold nulls, if the cursor knows.
    fn is_nullable(&self, ordinal: usize) -> Option<bool> {
        let _ = ordinal;
        None
    }

    fn is_null(&self, ordinal: usize) -> bool;

    fn get_value(&self, ordinal: usize) -> Result<Value>;

    fn get_bool(&self, ordinal: usize) -> Result<bool> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_i16(&self, ordinal: usize) -> Result<i16> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_i32(&self, ordinal: usize) -> Result<i32> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_i64(&self, ordinal: usize) -> Result<i64> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_f32(&self, ordinal: usize) -> Result<f32> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_f64(&self, ordinal: usize) -> Result<f64> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_string(&self, ordinal: usize) -> Result<String> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_uuid(&self, ordinal: usize) -> Result<uuid::Uuid> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_bytes(&self, ordinal: usize) -> Result<Vec<u8>> {
        self.get_value(ordinal)?.try_into()
    }

    fn get_date_time(&self, ordinal: usize) -> Result<chrono::NaiveDateTime> {
        self.get_value(ordinal)?.try_into()
    }

    /// The column names in ordinal order.
    fn signature(&self) -> Vec<String> {
        (0..self.field_count())
            .map(|ordinal| self.name(ordinal).to_string())
            .collect()
    }
}
