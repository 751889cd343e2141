use core::fmt;

use crate::Reflect;
use crate::info::PropertyKind;
use crate::ops::{ObjectArray, Scalar, ScalarArray};

/// An immutable view of a property through the accessor of its kind.
pub enum PropertyRef<'a> {
    Scalar(&'a dyn Scalar),
    Array(&'a dyn ScalarArray),
    Object(&'a dyn Reflect),
    ObjectArray(&'a dyn ObjectArray),
}

/// A mutable view of a property through the accessor of its kind.
pub enum PropertyMut<'a> {
    Scalar(&'a mut dyn Scalar),
    Array(&'a mut dyn ScalarArray),
    Object(&'a mut dyn Reflect),
    ObjectArray(&'a mut dyn ObjectArray),
}

macro_rules! impl_kind_fn {
    ($name:ident) => {
        impl $name<'_> {
            /// Returns the [`PropertyKind`] of the accessor.
            #[inline]
            pub const fn kind(&self) -> PropertyKind {
                match self {
                    Self::Scalar(_) => PropertyKind::Scalar,
                    Self::Array(_) => PropertyKind::Array,
                    Self::Object(_) => PropertyKind::Object,
                    Self::ObjectArray(_) => PropertyKind::ObjectArray,
                }
            }
        }

        impl fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Self::Scalar(v) => f.debug_tuple("Scalar").field(&v.to_scalar()).finish(),
                    Self::Array(v) => f.debug_tuple("Array").field(&v.len()).finish(),
                    Self::Object(v) => f.debug_tuple("Object").field(&v.type_path()).finish(),
                    Self::ObjectArray(v) => f.debug_tuple("ObjectArray").field(&v.len()).finish(),
                }
            }
        }
    };
}

impl_kind_fn!(PropertyRef);
impl_kind_fn!(PropertyMut);
