mod db_field;
pub use db_field::DbField;
