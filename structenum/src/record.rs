//! Record types whose fields are the members of an enumeration.

use std::fmt;

use crate::value::EnumValue;

/// A struct whose named fields are enum members sharing one scalar type.
///
/// Normally implemented with `#[derive(EnumRecord)]`, which also rejects
/// records the builder cannot handle: non-struct items, tuple structs, empty
/// structs, fields of mixed types, and reference or pointer fields (`&T`,
/// `*const T`, `Box<T>`, `Rc<T>`, `Arc<T>`, `Cow<T>`).
///
/// A hand-written implementation must call `resolve` exactly once per field,
/// in the order of [`EnumRecord::FIELD_NAMES`], and build the returned record
/// from the results.
pub trait EnumRecord: Sized {
    /// Scalar type of every member.
    type Value: EnumValue;

    /// Declared name of the record type.
    const TYPE_NAME: &'static str;

    /// Member names in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    /// Rebuilds the record, passing each member's name and current value
    /// through `resolve` in declaration order.
    fn resolve_fields<F>(self, resolve: F) -> Self
    where
        F: FnMut(&'static str, Self::Value) -> Self::Value;
}

/// Identifies a record type in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: &'static str,
    path: &'static str,
}

impl TypeDescriptor {
    pub fn of<T: EnumRecord>() -> Self {
        Self {
            name: T::TYPE_NAME,
            path: std::any::type_name::<T>(),
        }
    }

    /// Declared type name, e.g. `MealPreferences`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fully qualified type path as reported by the compiler.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Type name with one trailing `s` removed (`Statuses` -> `Statuse`,
    /// `MealPreferences` -> `MealPreference`). A suffix trim, not
    /// depluralization.
    pub fn display_name(&self) -> &'static str {
        self.name.strip_suffix('s').unwrap_or(self.name)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
