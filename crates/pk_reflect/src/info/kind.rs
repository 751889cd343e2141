use core::fmt;

/// The declared shape of a property.
///
/// A property's kind depends on its type only, never on its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// A single value directly representable as null, bool, number or string.
    Scalar,
    /// A homogeneous sequence of scalars.
    Array,
    /// A nested reflective object.
    Object,
    /// A sequence of nested reflective objects.
    ObjectArray,
}

impl PropertyKind {
    /// Returns `true` if properties of this kind contain reflective objects.
    #[inline]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Object | Self::ObjectArray)
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.pad("Scalar"),
            Self::Array => f.pad("Array"),
            Self::Object => f.pad("Object"),
            Self::ObjectArray => f.pad("ObjectArray"),
        }
    }
}
