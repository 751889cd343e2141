//! Static property declarations.
//!
//! - [`PropertyInfo`]: name, declared [`PropertyKind`] and type path of one property.
//! - [`PropertyKind`]: the four property shapes, `Scalar`, `Array`, `Object` and `ObjectArray`.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod property_info;

// -----------------------------------------------------------------------------
// Exports

pub use kind::PropertyKind;
pub use property_info::PropertyInfo;
