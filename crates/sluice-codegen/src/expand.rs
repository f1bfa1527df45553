mod entity;
mod fields;
mod util;

use crate::schema::Entity;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The entity being expanded
    entity: &'a Entity,

    /// Path prefix for sluice types
    sluice: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let entity_impl = self.expand_entity_impl();
        let accessors = self.expand_accessors();
        let field_struct = self.expand_field_struct();

        wrap_in_const(quote! {
            #accessors
            #entity_impl
            #field_struct
        })
    }
}

pub(super) fn entity(entity: &Entity) -> TokenStream {
    Expand {
        entity,
        sluice: quote!(_sluice::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use sluice as _sluice;
            #code
        };
    }
}
