use super::Expr;
use crate::{Entity, Primitive};

use sluice_core::stmt::{Operation, Order, Value};

use std::marker::PhantomData;

/// A property of `T` whose values have type `V`.
///
/// Generated by `#[derive(Entity)]` as `T::fields().<property>()`.
pub struct Path<T, V> {
    property: &'static str,
    _p: PhantomData<fn() -> (T, V)>,
}

/// A property with a sort direction.
pub struct Sort<T> {
    pub(crate) property: &'static str,
    pub(crate) order: Order,
    _p: PhantomData<fn() -> T>,
}

impl<T, V> Path<T, V> {
    pub const fn new(property: &'static str) -> Self {
        Path {
            property,
            _p: PhantomData,
        }
    }

    /// The property name, before column mapping.
    pub fn property(&self) -> &'static str {
        self.property
    }
}

impl<T: Entity, V: Primitive> Path<T, V> {
    fn compare(self, operation: Operation, value: Value) -> Expr<T> {
        Expr::compare(self.property, operation, value)
    }

    pub fn eq(self, rhs: impl Into<V>) -> Expr<T> {
        self.compare(Operation::Equal, rhs.into().into_value())
    }

    pub fn ne(self, rhs: impl Into<V>) -> Expr<T> {
        self.compare(Operation::NotEqual, rhs.into().into_value())
    }

    pub fn lt(self, rhs: impl Into<V>) -> Expr<T> {
        self.compare(Operation::LessThan, rhs.into().into_value())
    }

    pub fn le(self, rhs: impl Into<V>) -> Expr<T> {
        self.compare(Operation::LessThanOrEqual, rhs.into().into_value())
    }

    pub fn gt(self, rhs: impl Into<V>) -> Expr<T> {
        self.compare(Operation::GreaterThan, rhs.into().into_value())
    }

    pub fn ge(self, rhs: impl Into<V>) -> Expr<T> {
        self.compare(Operation::GreaterThanOrEqual, rhs.into().into_value())
    }

    /// `low <= property <= high`
    pub fn between(self, low: impl Into<V>, high: impl Into<V>) -> Expr<T> {
        let range = Value::List(vec![low.into().into_value(), high.into().into_value()]);
        self.compare(Operation::Between, range)
    }

    pub fn not_between(self, low: impl Into<V>, high: impl Into<V>) -> Expr<T> {
        let range = Value::List(vec![low.into().into_value(), high.into().into_value()]);
        self.compare(Operation::NotBetween, range)
    }

    pub fn in_list<I>(self, items: impl IntoIterator<Item = I>) -> Expr<T>
    where
        I: Into<V>,
    {
        self.compare(Operation::In, list::<V, I>(items))
    }

    pub fn not_in_list<I>(self, items: impl IntoIterator<Item = I>) -> Expr<T>
    where
        I: Into<V>,
    {
        self.compare(Operation::NotIn, list::<V, I>(items))
    }

    pub fn is_null(self) -> Expr<T> {
        self.compare(Operation::Equal, Value::Null)
    }

    pub fn is_not_null(self) -> Expr<T> {
        self.compare(Operation::NotEqual, Value::Null)
    }

    pub fn asc(self) -> Sort<T> {
        Sort::new(self.property, Order::Ascending)
    }

    pub fn desc(self) -> Sort<T> {
        Sort::new(self.property, Order::Descending)
    }
}

impl<T: Entity> Path<T, String> {
    pub fn like(self, pattern: impl Into<String>) -> Expr<T> {
        self.compare(Operation::Like, Value::String(pattern.into()))
    }

    pub fn not_like(self, pattern: impl Into<String>) -> Expr<T> {
        self.compare(Operation::NotLike, Value::String(pattern.into()))
    }

    /// `LIKE '%text%'`
    pub fn contains(self, text: impl AsRef<str>) -> Expr<T> {
        self.like(format!("%{}%", text.as_ref()))
    }

    pub fn starts_with(self, text: impl AsRef<str>) -> Expr<T> {
        self.like(format!("{}%", text.as_ref()))
    }

    pub fn ends_with(self, text: impl AsRef<str>) -> Expr<T> {
        self.like(format!("%{}", text.as_ref()))
    }
}

impl<T: Entity> Path<T, bool> {
    pub fn is_true(self) -> Expr<T> {
        self.eq(true)
    }

    pub fn is_false(self) -> Expr<T> {
        self.eq(false)
    }
}

impl<T> Sort<T> {
    fn new(property: &'static str, order: Order) -> Self {
        Sort {
            property,
            order,
            _p: PhantomData,
        }
    }

    pub fn property(&self) -> &'static str {
        self.property
    }

    pub fn order(&self) -> Order {
        self.order
    }
}

fn list<V: Primitive, I: Into<V>>(items: impl IntoIterator<Item = I>) -> Value {
    Value::List(
        items
            .into_iter()
            .map(|item| item.into().into_value())
            .collect(),
    )
}

impl<T, V> Clone for Path<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Path<T, V> {}

impl<T, V> core::fmt::Debug for Path<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Path({})", self.property)
    }
}

impl<T> Clone for Sort<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Sort<T> {}

impl<T> core::fmt::Debug for Sort<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Sort({} {})", self.property, self.order.sql_text())
    }
}
