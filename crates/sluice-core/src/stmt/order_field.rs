use super::{Field, Order};
use crate::{Error, Result};

/// A column to sort by together with its direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderField {
    field: Field,
    order: Order,
}

impl OrderField {
    /// Fails when the name is empty.
    pub fn new(name: impl Into<String>, order: Order) -> Result<OrderField> {
        let field = Field::new(name);

        if field.is_empty() {
            return Err(Error::argument_null("order field name"));
        }

        Ok(OrderField { field, order })
    }

    pub fn ascending(name: impl Into<String>) -> Result<OrderField> {
        OrderField::new(name, Order::Ascending)
    }

    pub fn descending(name: impl Into<String>) -> Result<OrderField> {
        OrderField::new(name, Order::Descending)
    }

    /// Parses `(name, direction)` pairs, preserving their order.
    pub fn parse<I, K>(pairs: I) -> Result<Vec<OrderField>>
    where
        I: IntoIterator<Item = (K, Order)>,
        K: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(name, order)| OrderField::new(name, order))
            .collect()
    }

    /// Parses a JSON object mapping column names to directions.
    ///
    /// Directions are `"asc"`/`"ascending"`, `"desc"`/`"descending"`, `1` or
    /// `-1`.
    pub fn parse_json(json: &serde_json::Value) -> Result<Vec<OrderField>> {
        let object = match json {
            serde_json::Value::Null => return Err(Error::argument_null("order by")),
            serde_json::Value::Object(object) => object,
            other => crate::bail!("expected an object of sort directions, got {other}"),
        };

        object
            .iter()
            .map(|(name, direction)| {
                let order = match direction {
                    serde_json::Value::String(s) => s.parse()?,
                    serde_json::Value::Number(n) if n.as_i64() == Some(1) => Order::Ascending,
                    serde_json::Value::Number(n) if n.as_i64() == Some(-1) => Order::Descending,
                    other => crate::bail!("`{other}` is not a sort direction for `{name}`"),
                };
                OrderField::new(name.as_str(), order)
            })
            .collect()
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn name(&self) -> &str {
        self.field.name()
    }

    pub fn order(&self) -> Order {
        self.order
    }
}
