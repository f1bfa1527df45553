use proc_macro2::TokenStream;

/// Creates a new identifier prefixed with `__sluice_` so generated items do
/// not collide with user-defined ones.
pub(crate) fn ident(name: &str) -> syn::Ident {
    quote::format_ident!("__sluice_{name}")
}

pub(crate) fn option_str(value: Option<&syn::LitStr>) -> TokenStream {
    match value {
        Some(value) => quote::quote!(::core::option::Option::Some(#value)),
        None => quote::quote!(::core::option::Option::None),
    }
}
