#[macro_use]
mod macros;

pub mod driver;
pub use driver::{Capability, Dialect, Reader, SchemaProvider};

mod error;
pub use error::{Error, IntoError};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses Sluice's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
