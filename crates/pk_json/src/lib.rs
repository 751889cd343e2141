//! Mapping between reflective objects and JSON.
//!
//! Every declared property of a [`Reflect`] object is handled by a
//! [keeper](keeper) chosen from the property's kind. Nested objects and
//! sequences of objects are walked recursively, so a whole object graph is
//! converted without per-type serialization code.
//!
//! - [`to_json`] / [`to_string`] / [`to_string_pretty`]: object to JSON.
//! - [`from_json`] / [`from_str`]: JSON into an existing object.
//!
//! Writing into an object is a partial update: JSON keys without a matching
//! property are ignored, properties without a matching key keep their value.
//! Sequences of objects keep their length; they are matched element by
//! element.
//!
//! # Example
//!
//! ```
//! use pk_reflect::derive::Reflect;
//! use serde_json::json;
//!
//! #[derive(Reflect, Default)]
//! struct Wheel {
//!     radius: f32,
//! }
//!
//! #[derive(Reflect, Default)]
//! struct Car {
//!     #[reflect(rename = "modelName")]
//!     model: String,
//!     wheels: Vec<Wheel>,
//! }
//!
//! let mut car = Car {
//!     model: String::new(),
//!     wheels: vec![Wheel::default(), Wheel::default()],
//! };
//!
//! pk_json::from_json(&mut car, &json!({
//!     "modelName": "T",
//!     "wheels": [{"radius": 0.5}, {"radius": 0.5}, {"radius": 9.0}],
//! })).unwrap();
//!
//! assert_eq!(car.model, "T");
//! assert_eq!(car.wheels.len(), 2);
//!
//! let text = pk_json::to_string(&car).unwrap();
//! assert_eq!(text, r#"{"modelName":"T","wheels":[{"radius":0.5},{"radius":0.5}]}"#);
//! ```
//!
//! [`Reflect`]: pk_reflect::Reflect
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;
extern crate std;

// -----------------------------------------------------------------------------
// Debug utils

#[cfg(all(feature = "debug", debug_assertions))]
mod trace;

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod error;
mod value;

pub mod keeper;
pub mod walker;

// -----------------------------------------------------------------------------
// Exports

pub use convert::{from_json, from_str, to_json, to_string, to_string_pretty};
pub use error::{JsonKind, KeeperError};
pub use value::{json_to_scalar, scalar_to_json};
