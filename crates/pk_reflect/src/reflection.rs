use alloc::vec::Vec;
use core::any::Any;

use crate::info::{PropertyInfo, PropertyKind};
use crate::ops::{PropertyMut, PropertyRef};

// -----------------------------------------------------------------------------
// Reflect

/// A reflective object: a value exposing a fixed set of named properties.
///
/// Property names are unique within one object and [`properties`] lists them
/// in declaration order. Every name listed by [`properties`] must be
/// reachable through [`property`] and [`property_mut`], and the returned
/// accessor must have the declared [`PropertyKind`].
///
/// # Recommendations
///
/// Use [the derive macro](crate::derive::Reflect), which upholds all of the
/// above and also implements [`Typed`], [`Property`] and [`Element`].
///
/// # Manual Implementation
///
/// ```
/// use pk_reflect::{Reflect, Typed, info::PropertyInfo};
/// use pk_reflect::ops::{PropertyMut, PropertyRef};
///
/// struct Celsius {
///     degrees: f64,
/// }
///
/// impl Typed for Celsius {
///     const PROPERTIES: &'static [PropertyInfo] = &[PropertyInfo::new::<f64>("degrees")];
/// }
///
/// impl Reflect for Celsius {
///     fn type_path(&self) -> &'static str {
///         "demo::Celsius"
///     }
///
///     fn properties(&self) -> &'static [PropertyInfo] {
///         Self::PROPERTIES
///     }
///
///     fn property(&self, name: &str) -> Option<PropertyRef<'_>> {
///         match name {
///             "degrees" => Some(PropertyRef::Scalar(&self.degrees)),
///             _ => None,
///         }
///     }
///
///     fn property_mut(&mut self, name: &str) -> Option<PropertyMut<'_>> {
///         match name {
///             "degrees" => Some(PropertyMut::Scalar(&mut self.degrees)),
///             _ => None,
///         }
///     }
/// }
///
/// let c = Celsius { degrees: 21.5 };
/// assert_eq!(c.property_info("degrees").unwrap().type_path(), "f64");
/// ```
///
/// [`properties`]: Reflect::properties
/// [`property`]: Reflect::property
/// [`property_mut`]: Reflect::property_mut
pub trait Reflect: Any {
    /// Returns the full path of the concrete type, used in diagnostics.
    fn type_path(&self) -> &'static str;

    /// Returns the declared properties in declaration order.
    fn properties(&self) -> &'static [PropertyInfo];

    /// Returns a read accessor for the property called `name`.
    fn property(&self, name: &str) -> Option<PropertyRef<'_>>;

    /// Returns a write accessor for the property called `name`.
    fn property_mut(&mut self, name: &str) -> Option<PropertyMut<'_>>;

    /// Returns the declaration of the property called `name`.
    #[inline]
    fn property_info(&self, name: &str) -> Option<&'static PropertyInfo> {
        self.properties().iter().find(|info| info.name() == name)
    }
}

// -----------------------------------------------------------------------------
// Typed

/// Static property declarations of a reflective type.
///
/// Implemented by the derive macro; [`Reflect::properties`] returns
/// [`Typed::PROPERTIES`].
pub trait Typed: Reflect {
    const PROPERTIES: &'static [PropertyInfo];
}

// -----------------------------------------------------------------------------
// Property

/// A type that can be stored in a field of a reflective object.
///
/// [`KIND`](Property::KIND) is the declared shape of the field. The
/// accessors must return the variant matching it.
pub trait Property: Any {
    const KIND: PropertyKind;

    fn as_property(&self) -> PropertyRef<'_>;

    fn as_property_mut(&mut self) -> PropertyMut<'_>;
}

// -----------------------------------------------------------------------------
// Element

/// A type that can be stored in a `Vec` property.
///
/// Scalars make `Vec<Self>` an `Array` property, reflective objects make it
/// an `ObjectArray` property.
#[allow(clippy::ptr_arg, reason = "the sequence itself is the accessor target")]
pub trait Element: Any + Sized {
    /// Kind of `Vec<Self>`, one of `Array` or `ObjectArray`.
    const SEQUENCE_KIND: PropertyKind;

    fn sequence_ref(sequence: &Vec<Self>) -> PropertyRef<'_>;

    fn sequence_mut(sequence: &mut Vec<Self>) -> PropertyMut<'_>;
}

impl<E: Element> Property for Vec<E> {
    const KIND: PropertyKind = E::SEQUENCE_KIND;

    #[inline]
    fn as_property(&self) -> PropertyRef<'_> {
        E::sequence_ref(self)
    }

    #[inline]
    fn as_property_mut(&mut self) -> PropertyMut<'_> {
        E::sequence_mut(self)
    }
}
