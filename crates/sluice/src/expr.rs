mod compile;
pub(crate) use compile::compile;

mod path;
pub use path::{Path, Sort};

use crate::Entity;

use sluice_core::stmt::{Conjunction, Operation, Value};

use std::{marker::PhantomData, ops::Not};

/// A typed predicate over the properties of `T`.
///
/// Built from [`Path`] comparisons and combined with [`and`](Expr::and),
/// [`or`](Expr::or) and `!`. The registry compiles it into a `QueryGroup`
/// over mapped column names.
pub struct Expr<T> {
    pub(crate) untyped: Node,
    _p: PhantomData<fn() -> T>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    /// `property <op> value`
    Compare {
        property: &'static str,
        operation: Operation,
        value: Value,
    },

    Group {
        conjunction: Conjunction,
        items: Vec<Node>,
        is_not: bool,
    },
}

impl<T: Entity> Expr<T> {
    pub(crate) fn compare(property: &'static str, operation: Operation, value: Value) -> Self {
        Expr::from_untyped(Node::Compare {
            property,
            operation,
            value,
        })
    }

    fn from_untyped(untyped: Node) -> Self {
        Expr {
            untyped,
            _p: PhantomData,
        }
    }

    pub fn and(self, rhs: Expr<T>) -> Self {
        Expr::from_untyped(self.untyped.combine(Conjunction::And, rhs.untyped))
    }

    pub fn or(self, rhs: Expr<T>) -> Self {
        Expr::from_untyped(self.untyped.combine(Conjunction::Or, rhs.untyped))
    }

    /// `AND` of every expression, or `None` when there are none.
    pub fn and_all(exprs: impl IntoIterator<Item = Expr<T>>) -> Option<Self> {
        exprs.into_iter().reduce(Expr::and)
    }

    pub fn or_any(exprs: impl IntoIterator<Item = Expr<T>>) -> Option<Self> {
        exprs.into_iter().reduce(Expr::or)
    }
}

impl Node {
    /// Joins two nodes, appending to `self` when it already is an
    /// un-negated group with the same conjunction.
    fn combine(self, conjunction: Conjunction, rhs: Node) -> Node {
        match self {
            Node::Group {
                conjunction: lhs_conjunction,
                mut items,
                is_not: false,
            } if lhs_conjunction == conjunction => {
                items.push(rhs);
                Node::Group {
                    conjunction,
                    items,
                    is_not: false,
                }
            }
            lhs => Node::Group {
                conjunction,
                items: vec![lhs, rhs],
                is_not: false,
            },
        }
    }

    fn negate(self) -> Node {
        match self {
            Node::Compare {
                property,
                operation,
                value,
            } => Node::Compare {
                property,
                operation: operation.negate(),
                value,
            },
            Node::Group {
                conjunction,
                items,
                is_not,
            } => Node::Group {
                conjunction,
                items,
                is_not: !is_not,
            },
        }
    }
}

impl<T: Entity> Not for Expr<T> {
    type Output = Expr<T>;

    fn not(self) -> Self::Output {
        Expr::from_untyped(self.untyped.negate())
    }
}

impl<T> Clone for Expr<T> {
    fn clone(&self) -> Self {
        Expr {
            untyped: self.untyped.clone(),
            _p: PhantomData,
        }
    }
}

impl<T> core::fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.untyped, f)
    }
}
