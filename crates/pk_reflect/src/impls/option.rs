use alloc::vec::Vec;

use super::primitive::impl_set_scalar;

use crate::info::PropertyKind;
use crate::ops::{CoercionError, PropertyMut, PropertyRef, Scalar, ScalarValue};
use crate::{Element, Property};

impl<T: Scalar> Scalar for Option<T> {
    #[inline]
    fn to_scalar(&self) -> ScalarValue {
        match self {
            Some(value) => value.to_scalar(),
            None => ScalarValue::Null,
        }
    }

    impl_set_scalar!();

    fn from_scalar(value: ScalarValue) -> Result<Self, CoercionError> {
        match value {
            ScalarValue::Null => Ok(None),
            value => T::from_scalar(value).map(Some),
        }
    }
}

impl<T: Scalar + 'static> Property for Option<T> {
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

impl<T: Scalar + 'static> Element for Option<T> {
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
