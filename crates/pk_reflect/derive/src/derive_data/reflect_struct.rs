use std::collections::BTreeMap;

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Field, Fields, GenericParam, Ident, Path, Type};

use super::FieldAttributes;

/// A field that becomes a property.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub name: String,
}

impl StructField<'_> {
    #[inline]
    pub fn ident(&self) -> &Ident {
        self.data
            .ident
            .as_ref()
            .expect("named fields are checked during parsing")
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.data.ty
    }
}

/// A struct with named fields accepted by `#[derive(Reflect)]`.
pub(crate) struct ReflectStruct<'a> {
    ast: &'a DeriveInput,
    pk_reflect_path: Path,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(ast: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(_) | Fields::Unit => {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "`Reflect` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Reflect` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        if let Some(GenericParam::Lifetime(param)) = ast
            .generics
            .params
            .iter()
            .find(|param| matches!(param, GenericParam::Lifetime(_)))
        {
            return Err(syn::Error::new(
                param.span(),
                "`Reflect` types cannot have lifetime parameters",
            ));
        }

        let mut fields = Vec::with_capacity(named.named.len());
        let mut seen: BTreeMap<String, Ident> = BTreeMap::new();

        for field in &named.named {
            let attrs = FieldAttributes::parse(&field.attrs)?;
            if attrs.skip.is_some() {
                continue;
            }

            let ident = field.ident.as_ref().expect("named field");
            let name = match &attrs.rename {
                Some(rename) => rename.value(),
                None => ident.unraw().to_string(),
            };

            if let Some(previous) = seen.get(&name) {
                return Err(syn::Error::new(
                    field.span(),
                    format!("property name `{name}` is already used by field `{previous}`"),
                ));
            }
            seen.insert(name.clone(), ident.clone());

            fields.push(StructField { data: field, name });
        }

        Ok(Self {
            ast,
            pk_reflect_path: crate::path::pk_reflect(),
            fields,
        })
    }

    #[inline]
    pub fn ast(&self) -> &'a DeriveInput {
        self.ast
    }

    #[inline]
    pub fn pk_reflect_path(&self) -> &Path {
        &self.pk_reflect_path
    }

    /// Fields that are properties, in declaration order.
    #[inline]
    pub fn active_fields(&self) -> &[StructField<'a>] {
        &self.fields
    }
}
