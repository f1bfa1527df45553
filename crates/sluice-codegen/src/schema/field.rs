use super::{Column, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// The Rust field identifier
    pub(crate) ident: syn::Ident,

    /// Property name: the identifier without any `r#` prefix
    pub(crate) name: String,

    pub(crate) ty: syn::Type,

    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// The `#[key]` attribute, if present
    pub(crate) key: Option<syn::Attribute>,

    /// The `#[auto]` attribute, if present: the database generates the value
    pub(crate) auto: Option<syn::Attribute>,

    /// Optional database column name and / or type
    pub(crate) column: Option<Column>,

    /// `#[ignore]`: the field is not mapped
    pub(crate) ignore: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    errs.check(attr.meta.require_path_only().map(|_| ()));
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("auto") {
                if attrs.auto.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[auto] attribute"));
                } else {
                    errs.check(attr.meta.require_path_only().map(|_| ()));
                    attrs.auto = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    attrs.column = errs.check(Column::from_ast(attr));
                }
            } else if attr.path().is_ident("ignore") {
                if attrs.ignore {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[ignore] attribute",
                    ));
                } else {
                    attrs.ignore = true;
                }
            } else if attr.path().is_ident("table") {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "#[table] belongs on the struct",
                ));
            }
        }

        if attrs.ignore && (attrs.key.is_some() || attrs.auto.is_some() || attrs.column.is_some())
        {
            errs.push(syn::Error::new_spanned(
                ident,
                "an #[ignore]d field cannot have mapping attributes",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            attrs,
        })
    }
}
