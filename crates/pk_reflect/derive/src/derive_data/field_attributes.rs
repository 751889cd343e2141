use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Options collected from the `#[reflect(...)]` attributes of one field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(skip)]`, the field is not a property.
    pub skip: Option<Span>,
    /// `#[reflect(rename = "...")]`, the property name.
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    if result.skip.is_some() {
                        return Err(meta.error("duplicate `skip`"));
                    }
                    result.skip = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    if result.rename.is_some() {
                        return Err(meta.error("duplicate `rename`"));
                    }
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() {
                        return Err(syn::Error::new(name.span(), "property name is empty"));
                    }
                    result.rename = Some(name);
                    Ok(())
                } else {
                    Err(meta.error("unsupported reflect attribute, expected `skip` or `rename`"))
                }
            })?;
        }

        if let (Some(_), Some(rename)) = (&result.skip, &result.rename) {
            return Err(syn::Error::new(
                rename.span(),
                "`rename` has no effect on a skipped field",
            ));
        }

        Ok(result)
    }
}
