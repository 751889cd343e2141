use thiserror::Error;

use crate::ops::ScalarValue;

/// A [`ScalarValue`] could not be converted into the native scalar type.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoercionError {
    #[error("expected `{expected}`, found null")]
    UnexpectedNull { expected: &'static str },

    #[error("expected `{expected}`, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("value {value} is not representable as `{expected}`")]
    NotRepresentable {
        expected: &'static str,
        value: ScalarValue,
    },

    #[error("expected a scalar value, found {found}")]
    NotScalar { found: &'static str },
}

/// An element of a scalar sequence failed to convert.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("element {index}: {source}")]
pub struct ElementError {
    pub index: usize,
    #[source]
    pub source: CoercionError,
}
