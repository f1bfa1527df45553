//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::{assert_bound, tests, DbTest, StaticSchema, VecReader};

pub use sluice::{
    schema::DbField,
    stmt::{Type, Value},
    Command, Dialect, Entity, Error, Filter, Query, Registry,
};

pub use pretty_assertions::assert_eq;
pub use std_util::prelude::*;
