mod capability;
pub use capability::{Capability, Dialect};

mod reader;
pub use reader::Reader;

mod schema_provider;
pub use schema_provider::SchemaProvider;
