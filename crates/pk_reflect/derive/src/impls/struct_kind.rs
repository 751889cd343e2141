use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, WhereClause, parse_quote};

use crate::derive_data::ReflectStruct;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let typed_trait_tokens = impl_trait_typed(info);
    let reflect_trait_tokens = impl_trait_reflect(info);
    let property_trait_tokens = impl_trait_property(info);
    let element_trait_tokens = impl_trait_element(info);

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens

        #property_trait_tokens

        #element_trait_tokens
    }
}

/// Where clause of every generated impl: `Any` on type parameters and
/// `Property` on property field types.
fn where_clause(info: &ReflectStruct) -> WhereClause {
    let pk_reflect_path = info.pk_reflect_path();
    let property_ = crate::path::property_(pk_reflect_path);
    let any_ = {
        let exports = crate::path::macro_exports_(pk_reflect_path);
        quote!(#exports::Any)
    };

    let generics = &info.ast().generics;
    let mut clause = generics
        .where_clause
        .clone()
        .unwrap_or_else(|| parse_quote!(where));

    for param in &generics.params {
        if let GenericParam::Type(param) = param {
            let ident = &param.ident;
            clause.predicates.push(parse_quote!(#ident: #any_));
        }
    }

    if !generics.params.is_empty() {
        for field in info.active_fields() {
            let ty = field.ty();
            clause.predicates.push(parse_quote!(#ty: #property_));
        }
    }

    clause
}

fn impl_trait_typed(info: &ReflectStruct) -> TokenStream {
    let pk_reflect_path = info.pk_reflect_path();
    let typed_ = crate::path::typed_(pk_reflect_path);
    let property_info_ = crate::path::property_info_(pk_reflect_path);

    let declarations = info.active_fields().iter().map(|field| {
        let ty = field.ty();
        let name = &field.name;
        quote!(#property_info_::new::<#ty>(#name))
    });

    let ident = &info.ast().ident;
    let (impl_generics, ty_generics, _) = info.ast().generics.split_for_impl();
    let where_clause = where_clause(info);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            const PROPERTIES: &'static [#property_info_] = &[
                #(#declarations,)*
            ];
        }
    }
}

fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let pk_reflect_path = info.pk_reflect_path();
    let reflect_ = crate::path::reflect_(pk_reflect_path);
    let typed_ = crate::path::typed_(pk_reflect_path);
    let property_ = crate::path::property_(pk_reflect_path);
    let property_info_ = crate::path::property_info_(pk_reflect_path);
    let property_ref_ = crate::path::property_ref_(pk_reflect_path);
    let property_mut_ = crate::path::property_mut_(pk_reflect_path);
    let exports = crate::path::macro_exports_(pk_reflect_path);

    let names = info
        .active_fields()
        .iter()
        .map(|field| &field.name)
        .collect::<Vec<_>>();
    let members = info
        .active_fields()
        .iter()
        .map(|field| field.ident())
        .collect::<Vec<_>>();

    let ident = &info.ast().ident;
    let (impl_generics, ty_generics, _) = info.ast().generics.split_for_impl();
    let where_clause = where_clause(info);

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn type_path(&self) -> &'static str {
                #exports::type_name::<Self>()
            }

            #[inline]
            fn properties(&self) -> &'static [#property_info_] {
                <Self as #typed_>::PROPERTIES
            }

            fn property(&self, name: &str) -> #exports::Option<#property_ref_<'_>> {
                match name {
                    #(#names => #exports::Option::Some(#property_::as_property(&self.#members)),)*
                    _ => #exports::Option::None,
                }
            }

            fn property_mut(&mut self, name: &str) -> #exports::Option<#property_mut_<'_>> {
                match name {
                    #(#names => #exports::Option::Some(#property_::as_property_mut(&mut self.#members)),)*
                    _ => #exports::Option::None,
                }
            }
        }
    }
}

fn impl_trait_property(info: &ReflectStruct) -> TokenStream {
    let pk_reflect_path = info.pk_reflect_path();
    let property_ = crate::path::property_(pk_reflect_path);
    let property_kind_ = crate::path::property_kind_(pk_reflect_path);
    let property_ref_ = crate::path::property_ref_(pk_reflect_path);
    let property_mut_ = crate::path::property_mut_(pk_reflect_path);

    let ident = &info.ast().ident;
    let (impl_generics, ty_generics, _) = info.ast().generics.split_for_impl();
    let where_clause = where_clause(info);

    quote! {
        impl #impl_generics #property_ for #ident #ty_generics #where_clause {
            const KIND: #property_kind_ = #property_kind_::Object;

            #[inline]
            fn as_property(&self) -> #property_ref_<'_> {
                #property_ref_::Object(self)
            }

            #[inline]
            fn as_property_mut(&mut self) -> #property_mut_<'_> {
                #property_mut_::Object(self)
            }
        }
    }
}

fn impl_trait_element(info: &ReflectStruct) -> TokenStream {
    let pk_reflect_path = info.pk_reflect_path();
    let element_ = crate::path::element_(pk_reflect_path);
    let property_kind_ = crate::path::property_kind_(pk_reflect_path);
    let property_ref_ = crate::path::property_ref_(pk_reflect_path);
    let property_mut_ = crate::path::property_mut_(pk_reflect_path);
    let exports = crate::path::macro_exports_(pk_reflect_path);

    let ident = &info.ast().ident;
    let (impl_generics, ty_generics, _) = info.ast().generics.split_for_impl();
    let where_clause = where_clause(info);

    quote! {
        impl #impl_generics #element_ for #ident #ty_generics #where_clause {
            const SEQUENCE_KIND: #property_kind_ = #property_kind_::ObjectArray;

            #[inline]
            fn sequence_ref(sequence: &#exports::Vec<Self>) -> #property_ref_<'_> {
                #property_ref_::ObjectArray(sequence)
            }

            #[inline]
            fn sequence_mut(sequence: &mut #exports::Vec<Self>) -> #property_mut_<'_> {
                #property_mut_::ObjectArray(sequence)
            }
        }
    }
}
