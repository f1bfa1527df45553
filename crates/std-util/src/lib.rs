pub mod collection;
pub mod result;

pub mod prelude {
    pub use crate::{assert_empty, assert_err, assert_ok, assert_unique};
}
