use super::ErrorSet;

/// Struct-level attributes.
#[derive(Debug, Default)]
pub(crate) struct EntityAttr {
    /// `#[table = "dbo.Customer"]`
    pub(crate) table: Option<syn::LitStr>,
}

impl EntityAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("table") {
                if self.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[table] attribute"));
                    continue;
                }

                if let Some(table) = errs.check(table_name(attr)) {
                    self.table = Some(table);
                }
            } else if ["key", "auto", "column", "ignore"]
                .iter()
                .any(|name| attr.path().is_ident(name))
            {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "this attribute belongs on a field",
                ));
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn table_name(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    const EXPECTED: &str = "expected `table = \"table_name\"`";

    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(syn::Error::new_spanned(attr, EXPECTED));
    };

    let syn::Expr::Lit(syn::ExprLit {
        lit: syn::Lit::Str(lit),
        ..
    }) = &meta.value
    else {
        return Err(syn::Error::new_spanned(attr, EXPECTED));
    };

    if lit.value().trim().is_empty() {
        return Err(syn::Error::new_spanned(lit, "table name must not be empty"));
    }

    Ok(lit.clone())
}
