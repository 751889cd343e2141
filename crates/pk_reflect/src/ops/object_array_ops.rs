use alloc::vec::Vec;

use crate::Reflect;

/// A fixed sequence of reflective objects.
///
/// The sequence is only accessed element by element; it is never grown or
/// shrunk through this trait.
///
/// For an index below [`len`], [`get`] and [`get_mut`] return `None` only
/// when the slot does not hold a reflective object (see
/// [`DynamicObjectList`]).
///
/// [`len`]: ObjectArray::len
/// [`get`]: ObjectArray::get
/// [`get_mut`]: ObjectArray::get_mut
/// [`DynamicObjectList`]: crate::ops::DynamicObjectList
pub trait ObjectArray {
    /// Returns the number of slots.
    fn len(&self) -> usize;

    /// Returns the object in slot `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the object in slot `index` mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the index of the first slot that holds no reflective object.
    fn first_invalid(&self) -> Option<usize> {
        (0..self.len()).find(|&index| self.get(index).is_none())
    }
}

impl<T: Reflect> ObjectArray for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice()
            .get_mut(index)
            .map(|item| item as &mut dyn Reflect)
    }

    #[inline]
    fn first_invalid(&self) -> Option<usize> {
        None
    }
}
