use alloc::string::String;
use core::fmt;

use crate::ops::CoercionError;

// -----------------------------------------------------------------------------
// ScalarValue

/// A scalar in neutral form.
///
/// Signed integers are stored as [`Int`](ScalarValue::Int), unsigned ones as
/// [`UInt`](ScalarValue::UInt). Conversions into a native type check range
/// and exactness, see the implementations in [`impls`](crate::impls).
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
}

impl ScalarValue {
    /// Returns a short name of the variant, used in error messages.
    #[inline]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) | Self::UInt(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! impl_from_native {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ScalarValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_from_native!(
    bool => Bool,
    i64 => Int,
    u64 => UInt,
    f64 => Float,
    String => String,
    &str => String,
);

// -----------------------------------------------------------------------------
// Scalar

/// A property value directly representable as null, bool, number or string.
///
/// Implemented for `bool`, the primitive integers up to 64 bits, `f32`,
/// `f64`, `char`, `String` and `Option<S>` of any scalar `S`.
///
/// # Examples
///
/// ```
/// use pk_reflect::ops::{Scalar, ScalarValue};
///
/// let mut value = 0_u8;
/// value.set_scalar(ScalarValue::Int(200)).unwrap();
/// assert_eq!(value, 200);
///
/// assert!(value.set_scalar(ScalarValue::Int(300)).is_err());
/// assert_eq!(value.to_scalar(), ScalarValue::UInt(200));
/// ```
pub trait Scalar {
    /// Reads the value.
    fn to_scalar(&self) -> ScalarValue;

    /// Coerces `value` into the native type and overwrites `self`.
    ///
    /// On failure `self` is left unchanged.
    fn set_scalar(&mut self, value: ScalarValue) -> Result<(), CoercionError>;

    /// Coerces `value` into a new native value.
    fn from_scalar(value: ScalarValue) -> Result<Self, CoercionError>
    where
        Self: Sized;
}
