//! See following macros:
//!
//! - [`Reflect`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields:
///
/// - `Typed`: the static list of property declarations.
/// - `Reflect`: by-name property access.
/// - `Property`: the struct can be a field of another reflected struct (kind `Object`).
/// - `Element`: `Vec<Self>` can be a field of another reflected struct (kind `ObjectArray`).
///
/// Every field type must implement `Property`. Fields become properties in
/// declaration order.
///
/// Tuple structs, unit structs, enums and unions are rejected, as are
/// lifetime parameters. Type parameters receive an `Any` bound and each field
/// type a `Property` bound.
///
/// ## Renaming
///
/// The property name defaults to the field name (raw identifiers lose their
/// `r#` prefix). Use `rename` to choose another one:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Account {
///     #[reflect(rename = "userName")]
///     user_name: String,
/// }
/// ```
///
/// Property names must be unique; a duplicate name is a compile error.
///
/// ## Skipping
///
/// A skipped field is not a property at all and does not need to implement
/// `Property`:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Session {
///     id: u64,
///     #[reflect(skip)]
///     cache: std::collections::HashMap<u64, String>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::new(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
