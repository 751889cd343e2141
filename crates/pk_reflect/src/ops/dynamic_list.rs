use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use crate::info::PropertyKind;
use crate::ops::{ObjectArray, PropertyMut, PropertyRef};
use crate::{Property, Reflect};

/// A type-erased sequence of reflective objects.
///
/// Unlike `Vec<T>`, slots may hold objects of different types, and may be
/// empty. An empty slot is not a reflective object: [`ObjectArray::get`]
/// returns `None` for it, which serializers report as an invalid object
/// reference.
///
/// # Examples
///
/// ```
/// use pk_reflect::{derive::Reflect, ops::{DynamicObjectList, ObjectArray}};
///
/// #[derive(Reflect)]
/// struct Node {
///     id: u32,
/// }
///
/// let mut list = DynamicObjectList::new();
/// list.push(Node { id: 1 });
/// list.push_empty();
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.first_invalid(), Some(1));
/// assert_eq!(list.downcast_ref::<Node>(0).map(|n| n.id), Some(1));
/// ```
#[derive(Default)]
pub struct DynamicObjectList {
    slots: Vec<Option<Box<dyn Reflect>>>,
}

impl DynamicObjectList {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates an empty list with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Appends an object.
    #[inline]
    pub fn push<T: Reflect>(&mut self, value: T) {
        self.slots.push(Some(Box::new(value)));
    }

    /// Appends a boxed object.
    #[inline]
    pub fn push_boxed(&mut self, value: Box<dyn Reflect>) {
        self.slots.push(Some(value));
    }

    /// Appends a slot holding no object.
    #[inline]
    pub fn push_empty(&mut self) {
        self.slots.push(None);
    }

    /// Takes the object out of slot `index`, leaving the slot empty.
    #[inline]
    pub fn take(&mut self, index: usize) -> Option<Box<dyn Reflect>> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Returns the number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the object in slot `index` if it is a `T`.
    pub fn downcast_ref<T: Reflect>(&self, index: usize) -> Option<&T> {
        let value: &dyn Any = self.slots.get(index)?.as_deref()?;
        value.downcast_ref::<T>()
    }

    /// Returns the object in slot `index` mutably if it is a `T`.
    pub fn downcast_mut<T: Reflect>(&mut self, index: usize) -> Option<&mut T> {
        let value: &mut dyn Any = self.slots.get_mut(index)?.as_deref_mut()?;
        value.downcast_mut::<T>()
    }
}

impl ObjectArray for DynamicObjectList {
    #[inline]
    fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.slots.get(index)?.as_deref()
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        match self.slots.get_mut(index)? {
            Some(value) => Some(value.as_mut()),
            None => None,
        }
    }
}

impl Property for DynamicObjectList {
    const KIND: PropertyKind = PropertyKind::ObjectArray;

    #[inline]
    fn as_property(&self) -> PropertyRef<'_> {
        PropertyRef::ObjectArray(self)
    }

    #[inline]
    fn as_property_mut(&mut self) -> PropertyMut<'_> {
        PropertyMut::ObjectArray(self)
    }
}

impl fmt::Debug for DynamicObjectList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.slots
                    .iter()
                    .map(|slot| slot.as_deref().map(Reflect::type_path)),
            )
            .finish()
    }
}
