//! Runtime reflection over named, typed properties.
//!
//! A reflective object ([`Reflect`]) exposes an ordered set of properties.
//! Each property declares one of four shapes ([`PropertyKind`]) and is
//! reached by name through [`PropertyRef`] / [`PropertyMut`]:
//!
//! | field type | kind | accessor |
//! |---|---|---|
//! | `bool`, numbers, `char`, `String`, `Option<S>` | `Scalar` | [`Scalar`] |
//! | `Vec<S>` of a scalar | `Array` | [`ScalarArray`] |
//! | a `#[derive(Reflect)]` struct | `Object` | [`Reflect`] |
//! | `Vec<T>` of a reflected struct, [`DynamicObjectList`] | `ObjectArray` | [`ObjectArray`] |
//!
//! Scalars are exchanged through the neutral [`ScalarValue`], which is what
//! serializers convert to and from their own value model.
//!
//! # Example
//!
//! ```
//! use pk_reflect::{Reflect, derive::Reflect, info::PropertyKind, ops::PropertyRef};
//!
//! #[derive(Reflect)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//!     tags: Vec<String>,
//! }
//!
//! let p = Point { x: 1, y: 2, tags: vec![] };
//! let names: Vec<_> = p.properties().iter().map(|info| info.name()).collect();
//! assert_eq!(names, ["x", "y", "tags"]);
//! assert_eq!(p.property_info("tags").unwrap().kind(), PropertyKind::Array);
//! assert!(matches!(p.property("x"), Some(PropertyRef::Scalar(_))));
//! ```
//!
//! [`PropertyKind`]: crate::info::PropertyKind
//! [`PropertyRef`]: crate::ops::PropertyRef
//! [`PropertyMut`]: crate::ops::PropertyMut
//! [`Scalar`]: crate::ops::Scalar
//! [`ScalarArray`]: crate::ops::ScalarArray
//! [`ObjectArray`]: crate::ops::ObjectArray
//! [`ScalarValue`]: crate::ops::ScalarValue
//! [`DynamicObjectList`]: crate::ops::DynamicObjectList
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::pk_reflect` paths; this alias lets the crate
// derive on its own types and run its doc tests.
extern crate self as pk_reflect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::{Element, Property, Reflect, Typed};
pub use pk_reflect_derive as derive;
