use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::ops::{ElementError, Scalar, ScalarValue};

/// A homogeneous sequence of scalars.
///
/// The sequence is always written as a whole: [`replace`] converts every
/// value first and swaps the sequence only if all of them succeed.
///
/// # Examples
///
/// ```
/// use pk_reflect::ops::{ScalarArray, ScalarValue};
///
/// let mut list = vec![1_i32, 2, 3];
/// list.replace(vec![ScalarValue::Int(7)]).unwrap();
/// assert_eq!(list, [7]);
///
/// let err = list.replace(vec![ScalarValue::Int(8), ScalarValue::Bool(true)]).unwrap_err();
/// assert_eq!(err.index, 1);
/// assert_eq!(list, [7]);
/// ```
///
/// [`replace`]: ScalarArray::replace
pub trait ScalarArray {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Reads the element at `index`.
    fn get(&self, index: usize) -> Option<ScalarValue>;

    /// Replaces the whole sequence with `values`, coerced in order.
    fn replace(&mut self, values: Vec<ScalarValue>) -> Result<(), ElementError>;

    /// Returns `true` if the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn ScalarArray + '_ {
    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> ScalarArrayIter<'_> {
        ScalarArrayIter::new(self)
    }
}

impl<T: Scalar> ScalarArray for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<ScalarValue> {
        self.as_slice().get(index).map(Scalar::to_scalar)
    }

    fn replace(&mut self, values: Vec<ScalarValue>) -> Result<(), ElementError> {
        let fresh = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| T::from_scalar(value).map_err(|source| ElementError { index, source }))
            .collect::<Result<Vec<T>, _>>()?;
        *self = fresh;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Iterator

/// An iterator over the elements of a [`ScalarArray`].
pub struct ScalarArrayIter<'a> {
    array: &'a dyn ScalarArray,
    index: usize,
}

impl<'a> ScalarArrayIter<'a> {
    #[inline(always)]
    pub const fn new(array: &'a dyn ScalarArray) -> Self {
        Self { array, index: 0 }
    }
}

impl Iterator for ScalarArrayIter<'_> {
    type Item = ScalarValue;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.array.len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for ScalarArrayIter<'_> {}

impl FusedIterator for ScalarArrayIter<'_> {}
