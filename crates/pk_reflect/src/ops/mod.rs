//! Accessors used to read and write properties.
//!
//! ## Menu
//!
//! - [`PropertyRef`] / [`PropertyMut`]: a property viewed through the accessor of its kind.
//! - [`Scalar`]: a single value, exchanged as a [`ScalarValue`].
//! - [`ScalarArray`]: a homogeneous sequence of scalars, replaced as a whole.
//! - [`ObjectArray`]: a fixed sequence of reflective objects, accessed by index.
//! - [`DynamicObjectList`]: a type-erased [`ObjectArray`] whose slots may be empty.
//!
//! Conversions from a [`ScalarValue`] into a native scalar fail with
//! [`CoercionError`]; sequence replacement reports the failing element with
//! [`ElementError`].

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod coercion_error;
mod dynamic_list;
mod kind;
mod object_array_ops;
mod scalar_ops;

// -----------------------------------------------------------------------------
// Exports

pub use array_ops::{ScalarArray, ScalarArrayIter};
pub use coercion_error::{CoercionError, ElementError};
pub use dynamic_list::DynamicObjectList;
pub use kind::{PropertyMut, PropertyRef};
pub use object_array_ops::ObjectArray;
pub use scalar_ops::{Scalar, ScalarValue};
