use pk_reflect::Reflect;
use pk_reflect::info::PropertyInfo;
use pk_reflect::ops::{PropertyMut, PropertyRef};
use serde_json::Value;

use super::{coercion, kind_mismatch, property_mut, property_ref};
use crate::KeeperError;
use crate::value::{json_to_scalar, scalar_to_json};

/// Keeper of a `Scalar` property.
#[derive(Debug, Clone, Copy)]
pub struct ScalarKeeper {
    info: &'static PropertyInfo,
}

impl ScalarKeeper {
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
            PropertyRef::Scalar(scalar) => Ok((self.info.name(), scalar_to_json(scalar.to_scalar()))),
            other => Err(kind_mismatch(self.info, other.kind())),
        }
    }

    /// Converts `json` and lets the native scalar coerce it.
    ///
    /// The property is unchanged when the conversion fails.
    pub fn set_value(&self, object: &mut dyn Reflect, json: &Value) -> Result<(), KeeperError> {
        match property_mut(object, self.info)? {
            PropertyMut::Scalar(scalar) => json_to_scalar(json)
                .and_then(|value| scalar.set_scalar(value))
                .map_err(|source| coercion(self.info, None, source)),
            other => Err(kind_mismatch(self.info, other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use pk_reflect::Typed;
    use pk_reflect::derive::Reflect;
    use pk_reflect::ops::CoercionError;
    use serde_json::json;

    use super::ScalarKeeper;
    use crate::KeeperError;

    #[derive(Reflect)]
    struct Sample {
        count: u8,
        name: String,
        ratio: Option<f64>,
    }

    fn sample() -> Sample {
        Sample {
            count: 3,
            name: String::from("a"),
            ratio: None,
        }
    }

    fn keeper(index: usize) -> ScalarKeeper {
        ScalarKeeper::new(&<Sample as Typed>::PROPERTIES[index])
    }

    #[test]
    fn get_value() {
        let object = sample();
        assert_eq!(keeper(0).get_value(&object).unwrap(), ("count", json!(3)));
        assert_eq!(keeper(1).get_value(&object).unwrap(), ("name", json!("a")));
        assert_eq!(keeper(2).get_value(&object).unwrap(), ("ratio", json!(null)));
    }

    #[test]
    fn set_value() {
        let mut object = sample();
        keeper(0).set_value(&mut object, &json!(250)).unwrap();
        keeper(2).set_value(&mut object, &json!(0.5)).unwrap();
        assert_eq!(object.count, 250);
        assert_eq!(object.ratio, Some(0.5));

        keeper(2).set_value(&mut object, &json!(null)).unwrap();
        assert_eq!(object.ratio, None);
    }

    #[test]
    fn coercion_failure() {
        let mut object = sample();

        let err = keeper(0).set_value(&mut object, &json!(256)).unwrap_err();
        assert!(matches!(
            err,
            KeeperError::Coercion {
                property: "count",
                index: None,
                source: CoercionError::NotRepresentable { .. },
            }
        ));

        let err = keeper(1).set_value(&mut object, &json!({"a": 1})).unwrap_err();
        assert!(matches!(
            err,
            KeeperError::Coercion {
                source: CoercionError::NotScalar { found: "object" },
                ..
            }
        ));

        assert_eq!(object.count, 3);
        assert_eq!(object.name, "a");
    }
}
