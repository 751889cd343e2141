use core::fmt;

use pk_reflect::info::PropertyKind;
use pk_reflect::ops::CoercionError;
use serde_json::Value;
use thiserror::Error;

// -----------------------------------------------------------------------------
// JsonKind

/// The shape of a JSON value, reported when a value has the wrong shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Returns the shape of `value`.
    #[inline]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// KeeperError

/// An error raised while mapping an object graph to or from JSON.
///
/// Errors are raised by the keeper that detects them and returned unchanged
/// to the caller. Writes performed before the error are not rolled back.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KeeperError {
    /// An object property (or the root) was given a non-object JSON value.
    #[error("expected a JSON object, found {found}")]
    JsonObjectExpected { found: JsonKind },

    /// A sequence property was given a non-array JSON value.
    #[error("expected a JSON array, found {found}")]
    JsonArrayExpected { found: JsonKind },

    /// A slot of an object sequence does not hold a reflective object.
    #[error("property `{property}` has no object at index {index}")]
    InvalidObjectReference {
        property: &'static str,
        index: usize,
    },

    /// A JSON value could not be converted to the property's native type.
    #[error("cannot convert property `{property}`{}: {source}", ElementSuffix(.index))]
    Coercion {
        property: &'static str,
        index: Option<usize>,
        #[source]
        source: CoercionError,
    },

    /// A declared property could not be reached by name.
    #[error("property `{property}` is declared by `{type_path}` but cannot be accessed")]
    MissingProperty {
        type_path: &'static str,
        property: &'static str,
    },

    /// A property accessor does not match the declared kind.
    #[error("property `{property}` is declared as {declared} but accessed as {found}")]
    KindMismatch {
        property: &'static str,
        declared: PropertyKind,
        found: PropertyKind,
    },

    /// The input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

struct ElementSuffix<'a>(&'a Option<usize>);

impl fmt::Display for ElementSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, " (element {index})"),
            None => Ok(()),
        }
    }
}
