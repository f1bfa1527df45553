use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `{Entity}Fields`, with one typed path per mapped field, and
    /// `Entity::fields()` returning it.
    pub(super) fn expand_field_struct(&self) -> TokenStream {
        let sluice = &self.sluice;
        let vis = &self.entity.vis;
        let entity_ident = &self.entity.ident;
        let field_struct_ident = &self.entity.field_struct_ident;

        let methods = self.entity.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let name = &field.name;
            let ty = &field.ty;

            quote! {
                #vis fn #field_ident(&self) -> #sluice::Path<#entity_ident, <#ty as #sluice::Primitive>::Scalar> {
                    #sluice::Path::new(#name)
                }
            }
        });

        quote! {
            #[derive(Debug, Clone, Copy)]
            #vis struct #field_struct_ident;

            impl #field_struct_ident {
                #( #methods )*
            }

            impl #entity_ident {
                #vis fn fields() -> #field_struct_ident {
                    #field_struct_ident
                }
            }
        }
    }
}
