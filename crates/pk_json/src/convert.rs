use alloc::format;
use alloc::string::{String, ToString};

use pk_reflect::Reflect;
use serde_json::{Map, Value};

use crate::KeeperError;
use crate::walker::{fill_object_from_json, object_to_json};

/// Serializes every property of `object` into a JSON object.
///
/// # Examples
///
/// ```
/// use pk_json::to_json;
/// use pk_reflect::derive::Reflect;
/// use serde_json::json;
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let map = to_json(&Point { x: 1, y: -2 }).unwrap();
/// assert_eq!(serde_json::Value::Object(map), json!({"x": 1, "y": -2}));
/// ```
pub fn to_json(object: &dyn Reflect) -> Result<Map<String, Value>, KeeperError> {
    log::debug!("to_json: `{}`", object.type_path());
    traversal(|| object_to_json(object))
}

/// Writes the JSON object `json` into `object`.
///
/// Only the properties named by `json` are written. See
/// [`fill_object_from_json`] for the matching rules.
///
/// # Examples
///
/// ```
/// use pk_json::from_json;
/// use pk_reflect::derive::Reflect;
/// use serde_json::json;
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mut point = Point { x: 1, y: 2 };
/// from_json(&mut point, &json!({"y": 5, "z": 0})).unwrap();
/// assert_eq!((point.x, point.y), (1, 5));
/// ```
pub fn from_json(object: &mut dyn Reflect, json: &Value) -> Result<(), KeeperError> {
    log::debug!("from_json: `{}`", object.type_path());
    traversal(|| fill_object_from_json(object, json))
}

/// Serializes `object` into compact JSON text.
pub fn to_string(object: &dyn Reflect) -> Result<String, KeeperError> {
    to_json(object).map(|map| Value::Object(map).to_string())
}

/// Serializes `object` into indented JSON text.
pub fn to_string_pretty(object: &dyn Reflect) -> Result<String, KeeperError> {
    to_json(object).map(|map| format!("{:#}", Value::Object(map)))
}

/// Parses `text` and writes the resulting JSON object into `object`.
///
/// Nothing is written when `text` is not valid JSON.
pub fn from_str(object: &mut dyn Reflect, text: &str) -> Result<(), KeeperError> {
    let json: Value = serde_json::from_str(text)?;
    from_json(object, &json)
}

#[inline]
fn traversal<T>(f: impl FnOnce() -> Result<T, KeeperError>) -> Result<T, KeeperError> {
    #[cfg(all(feature = "debug", debug_assertions))]
    crate::trace::reset();

    let result = f();

    #[cfg(all(feature = "debug", debug_assertions))]
    {
        if let Err(err) = &result {
            crate::trace::report(err);
        }
    }

    result
}
