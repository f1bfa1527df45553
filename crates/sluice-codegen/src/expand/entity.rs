use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// One getter and one setter fn per field. The static property table
    /// points at them.
    pub(super) fn expand_accessors(&self) -> TokenStream {
        let sluice = &self.sluice;
        let entity_ident = &self.entity.ident;

        let accessors = self.entity.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let ty = &field.ty;
            let get = util::ident(&format!("get_{}", field.name));
            let set = util::ident(&format!("set_{}", field.name));

            quote! {
                fn #get(entity: &#entity_ident) -> #sluice::Value {
                    <#ty as #sluice::Primitive>::into_value(
                        ::core::clone::Clone::clone(&entity.#field_ident),
                    )
                }

                fn #set(entity: &mut #entity_ident, value: #sluice::Value) -> #sluice::Result<()> {
                    entity.#field_ident = <#ty as #sluice::Primitive>::load(value)?;
                    ::core::result::Result::Ok(())
                }
            }
        });

        quote!( #( #accessors )* )
    }

    pub(super) fn expand_entity_impl(&self) -> TokenStream {
        let sluice = &self.sluice;
        let entity_ident = &self.entity.ident;
        let name = entity_ident.to_string();
        let table = util::option_str(self.entity.table.as_ref());
        let len = self.entity.fields.len();

        let properties = self.entity.fields.iter().map(|field| {
            let name = &field.name;
            let ty = &field.ty;
            let key = field.attrs.key.is_some();
            let auto = field.attrs.auto.is_some();
            let column = field.attrs.column.as_ref();
            let column_name = util::option_str(column.and_then(|column| column.name.as_ref()));
            let db_type = util::option_str(column.and_then(|column| column.ty.as_ref()));
            let get = util::ident(&format!("get_{name}"));
            let set = util::ident(&format!("set_{name}"));

            quote! {
                #sluice::Property {
                    name: #name,
                    ty: <#ty as #sluice::Primitive>::TYPE,
                    nullable: <#ty as #sluice::Primitive>::NULLABLE,
                    key: #key,
                    auto: #auto,
                    column: #column_name,
                    db_type: #db_type,
                    get: #get,
                    set: #set,
                },
            }
        });

        quote! {
            impl #sluice::Entity for #entity_ident {
                const NAME: &'static str = #name;
                const TABLE: ::core::option::Option<&'static str> = #table;

                fn properties() -> &'static [#sluice::Property<Self>] {
                    static PROPERTIES: [#sluice::Property<#entity_ident>; #len] = [
                        #( #properties )*
                    ];

                    &PROPERTIES
                }
            }
        }
    }
}
