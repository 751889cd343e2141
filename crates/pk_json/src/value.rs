//! Conversion between [`ScalarValue`] and JSON values.

use pk_reflect::ops::{CoercionError, ScalarValue};
use serde_json::{Number, Value};

use crate::JsonKind;

/// Converts a scalar into a JSON value.
///
/// Non-finite floats have no JSON representation and become `null`.
pub fn scalar_to_json(value: ScalarValue) -> Value {
    match value {
        ScalarValue::Null => Value::Null,
        ScalarValue::Bool(v) => Value::Bool(v),
        ScalarValue::Int(v) => Value::Number(v.into()),
        ScalarValue::UInt(v) => Value::Number(v.into()),
        ScalarValue::Float(v) => Number::from_f64(v).map_or(Value::Null, Value::Number),
        ScalarValue::String(v) => Value::String(v),
    }
}

/// Converts a JSON value into a scalar.
///
/// Numbers become [`ScalarValue::Int`] when they fit an `i64`,
/// [`ScalarValue::UInt`] when they fit a `u64`, and [`ScalarValue::Float`]
/// otherwise. Arrays and objects are not scalars.
pub fn json_to_scalar(value: &Value) -> Result<ScalarValue, CoercionError> {
    Ok(match value {
        Value::Null => ScalarValue::Null,
        Value::Bool(v) => ScalarValue::Bool(*v),
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                ScalarValue::Int(v)
            } else if let Some(v) = n.as_u64() {
                ScalarValue::UInt(v)
            } else {
                // Without `arbitrary_precision` every number is one of the three.
                ScalarValue::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(v) => ScalarValue::String(v.clone()),
        Value::Array(_) | Value::Object(_) => {
            return Err(CoercionError::NotScalar {
                found: JsonKind::of(value).as_str(),
            });
        }
    })
}

#[cfg(test)]
mod tests {
    use pk_reflect::ops::{CoercionError, ScalarValue};
    use serde_json::json;

    use super::{json_to_scalar, scalar_to_json};

    #[test]
    fn numbers_keep_their_class() {
        assert_eq!(json_to_scalar(&json!(-3)).unwrap(), ScalarValue::Int(-3));
        assert_eq!(
            json_to_scalar(&json!(u64::MAX)).unwrap(),
            ScalarValue::UInt(u64::MAX)
        );
        assert_eq!(json_to_scalar(&json!(2.5)).unwrap(), ScalarValue::Float(2.5));
    }

    #[test]
    fn composites_are_not_scalars() {
        assert_eq!(
            json_to_scalar(&json!([1])),
            Err(CoercionError::NotScalar { found: "array" })
        );
        assert_eq!(
            json_to_scalar(&json!({})),
            Err(CoercionError::NotScalar { found: "object" })
        );
    }

    #[test]
    fn non_finite_float_is_null() {
        assert_eq!(scalar_to_json(ScalarValue::Float(f64::NAN)), json!(null));
        assert_eq!(scalar_to_json(ScalarValue::Float(f64::INFINITY)), json!(null));
        assert_eq!(scalar_to_json(ScalarValue::Float(0.25)), json!(0.25));
    }

    #[test]
    fn plain_values() {
        assert_eq!(scalar_to_json(ScalarValue::Null), json!(null));
        assert_eq!(scalar_to_json("abc".into()), json!("abc"));
        assert_eq!(scalar_to_json(ScalarValue::UInt(7)), json!(7));
        assert_eq!(json_to_scalar(&json!(true)).unwrap(), ScalarValue::Bool(true));
    }
}
