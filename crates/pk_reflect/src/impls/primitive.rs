use alloc::string::String;
use alloc::vec::Vec;

use crate::info::PropertyKind;
use crate::ops::{CoercionError, PropertyMut, PropertyRef, Scalar, ScalarValue};
use crate::{Element, Property};

// -----------------------------------------------------------------------------
// Shared pieces

/// `Property` and `Element` for a type that already implements `Scalar`.
macro_rules! impl_scalar_property {
    ($ty:ty) => {
        impl Property for $ty {
            const KIND: PropertyKind = PropertyKind::Scalar;

            #[inline]
            fn as_property(&self) -> PropertyRef<'_> {
                PropertyRef::Scalar(self)
            }

            #[inline]
            fn as_property_mut(&mut self) -> PropertyMut<'_> {
                PropertyMut::Scalar(self)
            }
        }

        impl Element for $ty {
            const SEQUENCE_KIND: PropertyKind = PropertyKind::Array;

            #[inline]
            fn sequence_ref(sequence: &Vec<Self>) -> PropertyRef<'_> {
                PropertyRef::Array(sequence)
            }

            #[inline]
            fn sequence_mut(sequence: &mut Vec<Self>) -> PropertyMut<'_> {
                PropertyMut::Array(sequence)
            }
        }
    };
}

macro_rules! impl_set_scalar {
    () => {
        #[inline]
        fn set_scalar(&mut self, value: ScalarValue) -> Result<(), CoercionError> {
            *self = <Self as Scalar>::from_scalar(value)?;
            Ok(())
        }
    };
}

pub(super) use impl_set_scalar;

#[cold]
fn mismatch(expected: &'static str, value: &ScalarValue) -> CoercionError {
    match value {
        ScalarValue::Null => CoercionError::UnexpectedNull { expected },
        other => CoercionError::Mismatch {
            expected,
            found: other.kind_name(),
        },
    }
}

/// Widens an integral value so that every target type can range-check it.
fn integral(value: &ScalarValue, expected: &'static str) -> Result<i128, CoercionError> {
    match *value {
        ScalarValue::Int(v) => Ok(i128::from(v)),
        ScalarValue::UInt(v) => Ok(i128::from(v)),
        ScalarValue::Float(v) => {
            // Saturating cast; NaN maps to 0 and fails the comparison.
            let wide = v as i128;
            if wide as f64 == v && wide != i128::MAX && wide != i128::MIN {
                Ok(wide)
            } else {
                Err(CoercionError::NotRepresentable {
                    expected,
                    value: value.clone(),
                })
            }
        }
        ref other => Err(mismatch(expected, other)),
    }
}

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer {
    ($($ty:ty => $variant:ident as $wide:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                #[inline]
                #[allow(clippy::unnecessary_cast, reason = "isize and usize have no `From`")]
                fn to_scalar(&self) -> ScalarValue {
                    ScalarValue::$variant(*self as $wide)
                }

                impl_set_scalar!();

                fn from_scalar(value: ScalarValue) -> Result<Self, CoercionError> {
                    let expected = stringify!($ty);
                    let wide = integral(&value, expected)?;
                    <$ty>::try_from(wide)
                        .map_err(|_| CoercionError::NotRepresentable { expected, value })
                }
            }

            impl_scalar_property!($ty);
        )*
    };
}

impl_integer!(
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    isize => Int as i64,
    u8 => UInt as u64,
    u16 => UInt as u64,
    u32 => UInt as u64,
    u64 => UInt as u64,
    usize => UInt as u64,
);

// -----------------------------------------------------------------------------
// Floats

impl Scalar for f64 {
    #[inline]
    fn to_scalar(&self) -> ScalarValue {
        ScalarValue::Float(*self)
    }

    impl_set_scalar!();

    fn from_scalar(value: ScalarValue) -> Result<Self, CoercionError> {
        match value {
            ScalarValue::Float(v) => Ok(v),
            // Non-finite floats are written as null.
            ScalarValue::Null => Ok(f64::NAN),
            ScalarValue::Int(v) => Ok(v as f64),
            ScalarValue::UInt(v) => Ok(v as f64),
            ref other => Err(mismatch("f64", other)),
        }
    }
}

impl Scalar for f32 {
    #[inline]
    fn to_scalar(&self) -> ScalarValue {
        ScalarValue::Float(f64::from(*self))
    }

    impl_set_scalar!();

    fn from_scalar(value: ScalarValue) -> Result<Self, CoercionError> {
        let wide = <f64 as Scalar>::from_scalar(value).map_err(|err| match err {
            CoercionError::Mismatch { found, .. } => CoercionError::Mismatch {
                expected: "f32",
                found,
            },
            other => other,
        })?;
        if wide.is_finite() && (wide > f32::MAX as f64 || wide < f32::MIN as f64) {
            return Err(CoercionError::NotRepresentable {
                expected: "f32",
                value: ScalarValue::Float(wide),
            });
        }
        Ok(wide as f32)
    }
}

impl_scalar_property!(f64);
impl_scalar_property!(f32);

// -----------------------------------------------------------------------------
// Others

impl Scalar for bool {
    #[inline]
    fn to_scalar(&self) -> ScalarValue {
        ScalarValue::Bool(*self)
    }

    impl_set_scalar!();

    fn from_scalar(value: ScalarValue) -> Result<Self, CoercionError> {
        match value {
            ScalarValue::Bool(v) => Ok(v),
            ref other => Err(mismatch("bool", other)),
        }
    }
}

impl Scalar for String {
    #[inline]
    fn to_scalar(&self) -> ScalarValue {
        ScalarValue::String(self.clone())
    }

    impl_set_scalar!();

    fn from_scalar(value: ScalarValue) -> Result<Self, CoercionError> {
        match value {
            ScalarValue::String(v) => Ok(v),
            ref other => Err(mismatch("String", other)),
        }
    }
}

impl Scalar for char {
    #[inline]
    fn to_scalar(&self) -> ScalarValue {
        ScalarValue::String(String::from(*self))
    }

    impl_set_scalar!();

    fn from_scalar(value: ScalarValue) -> Result<Self, CoercionError> {
        let ScalarValue::String(text) = &value else {
            return Err(mismatch("char", &value));
        };
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(CoercionError::NotRepresentable {
                expected: "char",
                value,
            }),
        }
    }
}

impl_scalar_property!(bool);
impl_scalar_property!(String);
impl_scalar_property!(char);

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use crate::ops::{CoercionError, Scalar, ScalarValue};

    #[test]
    fn integer_range() {
        assert_eq!(u8::from_scalar(ScalarValue::Int(255)), Ok(255));
        assert_eq!(
            u8::from_scalar(ScalarValue::Int(-1)),
            Err(CoercionError::NotRepresentable {
                expected: "u8",
                value: ScalarValue::Int(-1)
            })
        );
        assert!(i64::from_scalar(ScalarValue::UInt(u64::MAX)).is_err());
        assert_eq!(u64::from_scalar(ScalarValue::UInt(u64::MAX)), Ok(u64::MAX));
    }

    #[test]
    fn integer_from_float() {
        assert_eq!(i32::from_scalar(ScalarValue::Float(42.0)), Ok(42));
        assert!(i32::from_scalar(ScalarValue::Float(42.5)).is_err());
        assert!(i32::from_scalar(ScalarValue::Float(f64::NAN)).is_err());
        assert!(i64::from_scalar(ScalarValue::Float(1e300)).is_err());
    }

    #[test]
    fn floats() {
        assert_eq!(f64::from_scalar(ScalarValue::Int(-3)), Ok(-3.0));
        assert_eq!(f32::from_scalar(ScalarValue::Float(0.5)), Ok(0.5));
        assert!(matches!(
            f32::from_scalar(ScalarValue::Float(1e300)),
            Err(CoercionError::NotRepresentable { expected: "f32", .. })
        ));
        assert!(f32::from_scalar(ScalarValue::Null).unwrap().is_nan());
        assert_eq!(
            f32::from_scalar(ScalarValue::Bool(true)),
            Err(CoercionError::Mismatch {
                expected: "f32",
                found: "bool"
            })
        );
    }

    #[test]
    fn null_float_is_nan() {
        let mut value = 1.5_f64;
        value.set_scalar(ScalarValue::Null).unwrap();
        assert!(value.is_nan());

        value.set_scalar(ScalarValue::Float(f64::INFINITY)).unwrap();
        assert_eq!(value, f64::INFINITY);
    }

    #[test]
    fn strict_kinds() {
        assert_eq!(
            bool::from_scalar(ScalarValue::Int(1)),
            Err(CoercionError::Mismatch {
                expected: "bool",
                found: "integer"
            })
        );
        assert!(String::from_scalar(ScalarValue::Bool(true)).is_err());
        assert_eq!(
            String::from_scalar(ScalarValue::Null),
            Err(CoercionError::UnexpectedNull { expected: "String" })
        );
    }

    #[test]
    fn char_needs_single_character() {
        assert_eq!(char::from_scalar(ScalarValue::from("x")), Ok('x'));
        assert!(char::from_scalar(ScalarValue::from("xy")).is_err());
        assert!(char::from_scalar(ScalarValue::from("")).is_err());
        assert_eq!('z'.to_scalar(), ScalarValue::String("z".to_string()));
    }

    #[test]
    fn failed_set_keeps_value() {
        let mut value = 7_i16;
        assert!(value.set_scalar(ScalarValue::Int(100_000)).is_err());
        assert_eq!(value, 7);

        value.set_scalar(ScalarValue::Float(-5.0)).unwrap();
        assert_eq!(value, -5);
    }
}
