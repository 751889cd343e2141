#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use pk_json as json;
pub use pk_reflect as reflect;

pub use pk_json::{from_json, to_json};
