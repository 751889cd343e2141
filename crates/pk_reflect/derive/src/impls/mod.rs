//! Code generation for `#[derive(Reflect)]`.

mod struct_kind;

pub(crate) use struct_kind::impl_struct;
