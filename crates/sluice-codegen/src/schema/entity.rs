use super::{EntityAttr, ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Entity {
    /// Entity visibility
    pub(crate) vis: syn::Visibility,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Mapped fields, in declaration order. `#[ignore]`d fields are left out.
    pub(crate) fields: Vec<Field>,

    /// Optional table to map the entity to
    pub(crate) table: Option<syn::LitStr>,

    /// The `{Entity}Fields` struct identifier
    pub(crate) field_struct_ident: syn::Ident,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entity generics are not supported",
            ));
        }

        let mut entity_attr = EntityAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        errs.check(entity_attr.populate_from_ast(&ast.attrs));

        for node in &node.named {
            if let Some(field) = errs.check(Field::from_ast(node)) {
                if !field.attrs.ignore {
                    fields.push(field);
                }
            }
        }

        for (attr, what) in [
            (fields.iter().filter_map(|f| f.attrs.key.as_ref()).nth(1), "#[key]"),
            (fields.iter().filter_map(|f| f.attrs.auto.as_ref()).nth(1), "#[auto]"),
        ] {
            if let Some(attr) = attr {
                errs.push(syn::Error::new_spanned(
                    attr,
                    format!("only one field can be marked {what}"),
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        if fields.is_empty() {
            return Err(syn::Error::new_spanned(
                ast,
                "entity must have at least one mapped field",
            ));
        }

        Ok(Entity {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            fields,
            table: entity_attr.table,
            field_struct_ident: syn::Ident::new(
                &format!("{}Fields", ast.ident),
                ast.ident.span(),
            ),
        })
    }
}
