//! structenum-shape: the rules a struct must follow to be an enum record.
//!
//! Shared by the `EnumRecord` derive, which turns a broken rule into a
//! compile error, and the inventory CLI, which reports it.
//!
//! - [`attrs`]: `#[enum_record(...)]` attribute parsing
//! - [`shape`]: field shape validation

pub mod attrs;
pub mod shape;

pub use attrs::{container_attrs, field_attrs, ContainerAttrs, FieldAttrs, ATTR};
pub use shape::{analyze, inspect_struct, type_key, Inspection, Member, RecordShape};
