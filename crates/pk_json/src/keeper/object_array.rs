use alloc::vec::Vec;

use pk_reflect::Reflect;
use pk_reflect::info::PropertyInfo;
use pk_reflect::ops::{ObjectArray, PropertyMut, PropertyRef};
use serde_json::Value;

use super::{at_index, kind_mismatch, property_mut, property_ref};
use crate::walker::{fill_object_from_json, object_to_json};
use crate::{JsonKind, KeeperError};

/// Keeper of an `ObjectArray` property: a sequence of nested reflective
/// objects.
///
/// The sequence is never resized. When writing, JSON elements beyond the
/// sequence length are dropped and objects beyond the JSON length are left
/// untouched.
///
/// Every slot must hold an object; this is checked before the first element
/// is read or written.
#[derive(Debug, Clone, Copy)]
pub struct ObjectArrayKeeper {
    info: &'static PropertyInfo,
}

impl ObjectArrayKeeper {
    #[inline]
    pub const fn new(info: &'static PropertyInfo) -> Self {
        Self { info }
    }

    #[inline]
    pub const fn info(&self) -> &'static PropertyInfo {
        self.info
    }

    pub fn get_value(&self, object: &dyn Reflect) -> Result<(&'static str, Value), KeeperError> {
        let sequence = match property_ref(object, self.info)? {
            PropertyRef::ObjectArray(sequence) => sequence,
            other => return Err(kind_mismatch(self.info, other.kind())),
        };
        self.check_slots(sequence)?;

        let mut items = Vec::with_capacity(sequence.len());
        for index in 0..sequence.len() {
            let element = sequence.get(index).ok_or_else(|| self.invalid(index))?;
            let map = at_index(index, || object_to_json(element))?;
            items.push(Value::Object(map));
        }

        Ok((self.info.name(), Value::Array(items)))
    }

    pub fn set_value(&self, object: &mut dyn Reflect, json: &Value) -> Result<(), KeeperError> {
        let Value::Array(items) = json else {
            return Err(KeeperError::JsonArrayExpected {
                found: JsonKind::of(json),
            });
        };

        let sequence = match property_mut(object, self.info)? {
            PropertyMut::ObjectArray(sequence) => sequence,
            other => return Err(kind_mismatch(self.info, other.kind())),
        };
        self.check_slots(sequence)?;

        let len = sequence.len();
        if items.len() > len {
            log::trace!(
                "property `{}`: dropping {} JSON elements beyond length {len}",
                self.info.name(),
                items.len() - len,
            );
        } else if items.len() < len {
            log::trace!(
                "property `{}`: leaving {} objects untouched",
                self.info.name(),
                len - items.len(),
            );
        }

        for (index, item) in items.iter().take(len).enumerate() {
            let element = sequence.get_mut(index).ok_or_else(|| self.invalid(index))?;
            at_index(index, || fill_object_from_json(element, item))?;
        }

        Ok(())
    }

    fn check_slots(&self, sequence: &dyn ObjectArray) -> Result<(), KeeperError> {
        match sequence.first_invalid() {
            Some(index) => Err(self.invalid(index)),
            None => Ok(()),
        }
    }

    #[cold]
    fn invalid(&self, index: usize) -> KeeperError {
        KeeperError::InvalidObjectReference {
            property: self.info.name(),
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use pk_reflect::Typed;
    use pk_reflect::derive::Reflect;
    use pk_reflect::ops::DynamicObjectList;
    use serde_json::json;

    use super::ObjectArrayKeeper;
    use crate::KeeperError;

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Item {
        n: i32,
    }

    #[derive(Reflect, Default)]
    struct Holder {
        items: Vec<Item>,
        dynamic: DynamicObjectList,
    }

    fn keeper(index: usize) -> ObjectArrayKeeper {
        ObjectArrayKeeper::new(&<Holder as Typed>::PROPERTIES[index])
    }

    fn items(values: &[i32]) -> Vec<Item> {
        values.iter().map(|&n| Item { n }).collect()
    }

    #[test]
    fn longer_json_is_truncated() {
        let mut holder = Holder {
            items: items(&[0, 0, 0]),
            ..Holder::default()
        };
        let json = json!([{"n": 1}, {"n": 2}, {"n": 3}, {"n": 4}, {"n": 5}]);
        keeper(0).set_value(&mut holder, &json).unwrap();
        assert_eq!(holder.items, items(&[1, 2, 3]));
    }

    #[test]
    fn shorter_json_leaves_tail() {
        let mut holder = Holder {
            items: items(&[0, 0, 0, 0, 0]),
            ..Holder::default()
        };
        let json = json!([{"n": 1}, {"n": 2}, {"n": 3}]);
        keeper(0).set_value(&mut holder, &json).unwrap();
        assert_eq!(holder.items, items(&[1, 2, 3, 0, 0]));
    }

    #[test]
    fn empty_slot_is_invalid() {
        let mut holder = Holder::default();
        holder.dynamic.push(Item { n: 1 });
        holder.dynamic.push_empty();

        let err = keeper(1).get_value(&holder).unwrap_err();
        assert!(matches!(
            err,
            KeeperError::InvalidObjectReference {
                property: "dynamic",
                index: 1
            }
        ));

        // Checked before the first element is written.
        let err = keeper(1)
            .set_value(&mut holder, &json!([{"n": 9}]))
            .unwrap_err();
        assert!(matches!(err, KeeperError::InvalidObjectReference { index: 1, .. }));
        assert_eq!(holder.dynamic.downcast_ref::<Item>(0), Some(&Item { n: 1 }));
    }

    #[test]
    fn get_value() {
        let holder = Holder {
            items: vec![Item { n: 4 }],
            ..Holder::default()
        };
        assert_eq!(
            keeper(0).get_value(&holder).unwrap(),
            ("items", json!([{"n": 4}]))
        );
        assert_eq!(keeper(1).get_value(&holder).unwrap(), ("dynamic", json!([])));
    }
}
