//! Built-in [`Property`](crate::Property) implementations.
//!
//! ## Implemented Menu
//!
//! - scalars:
//!     - `bool`, `char`, `String`
//!     - `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`
//!     - `Option<S>` for any scalar `S`, `None` being null
//! - arrays:
//!     - `Vec<S>` for any scalar `S`
//! - object arrays:
//!     - `Vec<T>` for any `#[derive(Reflect)]` type `T`
//!     - [`DynamicObjectList`](crate::ops::DynamicObjectList)
//!
//! ## Coercion
//!
//! - Integers accept integral numbers within range; a float is accepted
//!   when it has no fractional part.
//! - Floats accept any number. `f32` rejects finite values beyond its range.
//!   Null reads as NaN, since non-finite floats have no JSON number form.
//! - `bool` and `String` accept only their own kind, `char` accepts a
//!   string of exactly one character.
//! - Apart from floats, only `Option<S>` accepts null.

// -----------------------------------------------------------------------------
// Modules

mod option;
mod primitive;
