//! Paths used by code generated from `#[derive(Reflect)]`.

pub use alloc::vec::Vec;
pub use core::any::{Any, type_name};
pub use core::option::Option;
