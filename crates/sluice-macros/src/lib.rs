extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `sluice::Entity` for a struct with named fields.
///
/// Struct attribute: `#[table = "name"]`. Field attributes: `#[key]`,
/// `#[auto]`, `#[column("name", type = "DB TYPE")]` and `#[ignore]`.
#[proc_macro_derive(Entity, attributes(table, key, auto, column, ignore))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    match sluice_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
