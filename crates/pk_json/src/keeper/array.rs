use alloc::vec::Vec;

use pk_reflect::Reflect;
use pk_reflect::info::PropertyInfo;
use pk_reflect::ops::{PropertyMut, PropertyRef};
use serde_json::Value;

use super::{coercion, kind_mismatch, property_mut, property_ref};
use crate::value::{json_to_scalar, scalar_to_json};
use crate::{JsonKind, KeeperError};

/// Keeper of an `Array` property: a homogeneous sequence of scalars.
///
/// Writing replaces the whole sequence. Every element is converted before
/// anything is written, so a failing element leaves the old sequence intact.
#[derive(Debug, Clone, Copy)]
pub struct ArrayKeeper {
    info: &'static PropertyInfo,
}

impl ArrayKeeper {
    #[inline]
    pub const fn new(info: &'static PropertyInfo) -> Self {
        Self { info }
    }

    #[inline]
    pub const fn info(&self) -> &'static PropertyInfo {
        self.info
    }

    pub fn get_value(&self, object: &dyn Reflect) -> Result<(&'static str, Value), KeeperError> {
        match property_ref(object, self.info)? {
            PropertyRef::Array(array) => {
                let items = array.iter().map(scalar_to_json).collect();
                Ok((self.info.name(), Value::Array(items)))
            }
            other => Err(kind_mismatch(self.info, other.kind())),
        }
    }

    pub fn set_value(&self, object: &mut dyn Reflect, json: &Value) -> Result<(), KeeperError> {
        let Value::Array(items) = json else {
            return Err(KeeperError::JsonArrayExpected {
                found: JsonKind::of(json),
            });
        };

        let array = match property_mut(object, self.info)? {
            PropertyMut::Array(array) => array,
            other => return Err(kind_mismatch(self.info, other.kind())),
        };

        let values = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                json_to_scalar(item).map_err(|source| coercion(self.info, Some(index), source))
            })
            .collect::<Result<Vec<_>, _>>()?;

        array
            .replace(values)
            .map_err(|err| coercion(self.info, Some(err.index), err.source))
    }
}
