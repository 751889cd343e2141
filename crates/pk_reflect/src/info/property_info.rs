use core::fmt;

use crate::Property;
use crate::info::PropertyKind;

/// Declaration of one property: its name, kind and field type.
///
/// # Examples
///
/// ```
/// use pk_reflect::info::{PropertyInfo, PropertyKind};
///
/// const INFO: PropertyInfo = PropertyInfo::new::<Vec<u8>>("bytes");
///
/// assert_eq!(INFO.name(), "bytes");
/// assert_eq!(INFO.kind(), PropertyKind::Array);
/// ```
#[derive(Clone, Copy)]
pub struct PropertyInfo {
    name: &'static str,
    kind: PropertyKind,
    // Resolved on demand; `type_name` is not a const fn.
    type_path: fn() -> &'static str,
}

impl PropertyInfo {
    /// Creates the declaration of a property called `name` holding a `T`.
    #[inline]
    pub const fn new<T: Property>(name: &'static str) -> Self {
        Self {
            name,
            kind: T::KIND,
            type_path: core::any::type_name::<T>,
        }
    }

    /// Returns the property name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared kind.
    #[inline]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Returns the path of the field type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        (self.type_path)()
    }
}

impl fmt::Debug for PropertyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyInfo")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("type_path", &self.type_path())
            .finish()
    }
}
