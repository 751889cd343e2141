use pk_reflect::Reflect;
use pk_reflect::info::PropertyInfo;
use pk_reflect::ops::{PropertyMut, PropertyRef};
use serde_json::Value;

use super::{kind_mismatch, property_mut, property_ref};
use crate::KeeperError;
use crate::walker::{fill_object_from_json, object_to_json};

/// Keeper of an `Object` property: a nested reflective object.
///
/// Both directions delegate to the [walker](crate::walker).
#[derive(Debug, Clone, Copy)]
pub struct ObjectKeeper {
    info: &'static PropertyInfo,
}

impl ObjectKeeper {
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
            PropertyRef::Object(nested) => {
                Ok((self.info.name(), Value::Object(object_to_json(nested)?)))
            }
            other => Err(kind_mismatch(self.info, other.kind())),
        }
    }

    pub fn set_value(&self, object: &mut dyn Reflect, json: &Value) -> Result<(), KeeperError> {
        match property_mut(object, self.info)? {
            PropertyMut::Object(nested) => fill_object_from_json(nested, json),
            other => Err(kind_mismatch(self.info, other.kind())),
        }
    }
}
