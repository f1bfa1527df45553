mod conjunction;
pub use conjunction::Conjunction;

mod criterion;
pub use criterion::Criterion;

mod dynamic;
pub use dynamic::Dynamic;

mod field;
pub use field::Field;

mod operation;
pub use operation::Operation;

mod order;
pub use order::Order;

mod order_field;
pub use order_field::OrderField;

mod query_field;
pub use query_field::QueryField;

mod query_group;
pub use query_group::QueryGroup;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_cast;

mod value_chrono;
