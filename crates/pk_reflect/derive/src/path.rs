//! Paths emitted into generated code.
//!
//! Every path is built from the crate path returned by [`pk_reflect`], so
//! that generated code works whether the user depends on `pk_reflect`
//! directly or through `pk_core`.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `pk_reflect` crate.
///
/// See [`pk_macro_utils::Manifest`] for the resolution rules.
pub(crate) fn pk_reflect() -> syn::Path {
    pk_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("pk_reflect"))
}

#[inline(always)]
pub(crate) fn reflect_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::Reflect }
}

#[inline(always)]
pub(crate) fn typed_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::Typed }
}

#[inline(always)]
pub(crate) fn property_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::Property }
}

#[inline(always)]
pub(crate) fn element_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::Element }
}

#[inline(always)]
pub(crate) fn property_info_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::info::PropertyInfo }
}

#[inline(always)]
pub(crate) fn property_kind_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::info::PropertyKind }
}

#[inline(always)]
pub(crate) fn property_ref_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::ops::PropertyRef }
}

#[inline(always)]
pub(crate) fn property_mut_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::ops::PropertyMut }
}

#[inline(always)]
pub(crate) fn macro_exports_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::__macro_exports }
}
