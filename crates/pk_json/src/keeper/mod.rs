//! Keepers: per-property mapping between a reflective object and JSON.
//!
//! A [`Keeper`] binds one declared property to the variant handling its
//! [`PropertyKind`]. Keepers hold no state besides that binding; the object
//! is passed to every [`get_value`](Keeper::get_value) and
//! [`set_value`](Keeper::set_value) call.
//!
//! | kind | keeper | JSON |
//! |---|---|---|
//! | `Scalar` | [`ScalarKeeper`] | null, bool, number or string |
//! | `Array` | [`ArrayKeeper`] | array of scalars |
//! | `Object` | [`ObjectKeeper`] | object |
//! | `ObjectArray` | [`ObjectArrayKeeper`] | array of objects |
//!
//! [`ObjectKeeper`] and [`ObjectArrayKeeper`] recurse into the nested objects
//! through the [walker](crate::walker).

use alloc::vec::Vec;

use pk_reflect::Reflect;
use pk_reflect::info::{PropertyInfo, PropertyKind};
use pk_reflect::ops::{CoercionError, PropertyMut, PropertyRef};
use serde_json::Value;

use crate::KeeperError;

// -----------------------------------------------------------------------------
// Modules

mod array;
mod object;
mod object_array;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use array::ArrayKeeper;
pub use object::ObjectKeeper;
pub use object_array::ObjectArrayKeeper;
pub use scalar::ScalarKeeper;

// -----------------------------------------------------------------------------
// Keeper

/// The keeper of one property, selected from its declared kind.
#[derive(Debug, Clone, Copy)]
pub enum Keeper {
    Scalar(ScalarKeeper),
    Array(ArrayKeeper),
    Object(ObjectKeeper),
    ObjectArray(ObjectArrayKeeper),
}

impl Keeper {
    /// Returns the declaration of the bound property.
    #[inline]
    pub const fn info(&self) -> &'static PropertyInfo {
        match self {
            Self::Scalar(keeper) => keeper.info(),
            Self::Array(keeper) => keeper.info(),
            Self::Object(keeper) => keeper.info(),
            Self::ObjectArray(keeper) => keeper.info(),
        }
    }

    /// Returns the name of the bound property, used as the JSON key.
    #[inline]
    pub const fn property_name(&self) -> &'static str {
        self.info().name()
    }

    /// Reads the property of `object` as a `(key, value)` pair.
    pub fn get_value(&self, object: &dyn Reflect) -> Result<(&'static str, Value), KeeperError> {
        at_property(self.property_name(), || match self {
            Self::Scalar(keeper) => keeper.get_value(object),
            Self::Array(keeper) => keeper.get_value(object),
            Self::Object(keeper) => keeper.get_value(object),
            Self::ObjectArray(keeper) => keeper.get_value(object),
        })
    }

    /// Writes `json` into the property of `object`.
    pub fn set_value(&self, object: &mut dyn Reflect, json: &Value) -> Result<(), KeeperError> {
        at_property(self.property_name(), || match self {
            Self::Scalar(keeper) => keeper.set_value(object, json),
            Self::Array(keeper) => keeper.set_value(object, json),
            Self::Object(keeper) => keeper.set_value(object, json),
            Self::ObjectArray(keeper) => keeper.set_value(object, json),
        })
    }
}

// -----------------------------------------------------------------------------
// Selection

/// Selects the keeper for a property from its declared kind.
#[inline]
pub const fn select_keeper(info: &'static PropertyInfo) -> Keeper {
    match info.kind() {
        PropertyKind::Scalar => Keeper::Scalar(ScalarKeeper::new(info)),
        PropertyKind::Array => Keeper::Array(ArrayKeeper::new(info)),
        PropertyKind::Object => Keeper::Object(ObjectKeeper::new(info)),
        PropertyKind::ObjectArray => Keeper::ObjectArray(ObjectArrayKeeper::new(info)),
    }
}

/// Selects one keeper per declared property of `object`, in declaration order.
pub fn select_keepers(object: &dyn Reflect) -> Vec<Keeper> {
    object.properties().iter().map(select_keeper).collect()
}

// -----------------------------------------------------------------------------
// Shared helpers

fn property_ref<'a>(
    object: &'a dyn Reflect,
    info: &'static PropertyInfo,
) -> Result<PropertyRef<'a>, KeeperError> {
    object
        .property(info.name())
        .ok_or_else(|| KeeperError::MissingProperty {
            type_path: object.type_path(),
            property: info.name(),
        })
}

fn property_mut<'a>(
    object: &'a mut dyn Reflect,
    info: &'static PropertyInfo,
) -> Result<PropertyMut<'a>, KeeperError> {
    let type_path = object.type_path();
    object
        .property_mut(info.name())
        .ok_or(KeeperError::MissingProperty {
            type_path,
            property: info.name(),
        })
}

#[inline]
fn kind_mismatch(info: &'static PropertyInfo, found: PropertyKind) -> KeeperError {
    KeeperError::KindMismatch {
        property: info.name(),
        declared: info.kind(),
        found,
    }
}

#[inline]
fn coercion(info: &'static PropertyInfo, index: Option<usize>, source: CoercionError) -> KeeperError {
    KeeperError::Coercion {
        property: info.name(),
        index,
        source,
    }
}

// -----------------------------------------------------------------------------
// Debug path

#[cfg(all(feature = "debug", debug_assertions))]
#[inline]
fn at_property<T>(
    name: &'static str,
    f: impl FnOnce() -> Result<T, KeeperError>,
) -> Result<T, KeeperError> {
    crate::trace::scoped(crate::trace::Segment::Property(name), f)
}

#[cfg(not(all(feature = "debug", debug_assertions)))]
#[inline(always)]
fn at_property<T>(
    _name: &'static str,
    f: impl FnOnce() -> Result<T, KeeperError>,
) -> Result<T, KeeperError> {
    f()
}

#[cfg(all(feature = "debug", debug_assertions))]
#[inline]
fn at_index<T>(index: usize, f: impl FnOnce() -> Result<T, KeeperError>) -> Result<T, KeeperError> {
    crate::trace::scoped(crate::trace::Segment::Index(index), f)
}

#[cfg(not(all(feature = "debug", debug_assertions)))]
#[inline(always)]
fn at_index<T>(_index: usize, f: impl FnOnce() -> Result<T, KeeperError>) -> Result<T, KeeperError> {
    f()
}
