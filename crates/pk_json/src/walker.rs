//! Object walker: maps a whole reflective object through its keepers.
//!
//! The walker and the [`ObjectKeeper`]/[`ObjectArrayKeeper`] call each other,
//! so a traversal recurses once per nesting level and ends at scalar and
//! array properties. Cyclic object graphs are not detected.
//!
//! [`ObjectKeeper`]: crate::keeper::ObjectKeeper
//! [`ObjectArrayKeeper`]: crate::keeper::ObjectArrayKeeper

use alloc::string::String;

use pk_reflect::Reflect;
use serde_json::{Map, Value};

use crate::keeper::select_keepers;
use crate::{JsonKind, KeeperError};

/// Reads every declared property of `object` into a new JSON object.
///
/// Keys appear in declaration order.
pub fn object_to_json(object: &dyn Reflect) -> Result<Map<String, Value>, KeeperError> {
    let keepers = select_keepers(object);
    let mut map = Map::with_capacity(keepers.len());

    for keeper in keepers {
        let (key, value) = keeper.get_value(object)?;
        map.insert(key.into(), value);
    }

    Ok(map)
}

/// Writes the members of the JSON object `json` into `object`.
///
/// Each key is matched against the declared property names; a property is
/// written at most once per call. Keys without a property are ignored and
/// properties without a key are left unchanged.
///
/// The first failing property aborts the call. Properties written before it
/// keep their new values.
pub fn fill_object_from_json(object: &mut dyn Reflect, json: &Value) -> Result<(), KeeperError> {
    let Value::Object(members) = json else {
        return Err(KeeperError::JsonObjectExpected {
            found: JsonKind::of(json),
        });
    };

    let mut keepers = select_keepers(object);

    for (key, value) in members {
        match keepers.iter().position(|keeper| keeper.property_name() == key) {
            Some(position) => {
                let keeper = keepers.remove(position);
                keeper.set_value(object, value)?;
            }
            None => log::trace!("`{}` has no property `{key}`, ignored", object.type_path()),
        }
    }

    Ok(())
}
