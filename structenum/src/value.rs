//! The scalar contract shared by every field of a record.

use std::borrow::Borrow;
use std::fmt::{Debug, Display};

/// A scalar type usable as the value of an enum member.
///
/// `is_zero` tells the builder whether a field was left unset. Only text
/// scalars can be derived from a field name; for every other scalar
/// `from_field_name` returns `None` and an unset field stays at zero. A
/// numeric field cannot distinguish "unset" from "explicitly zero", so both
/// resolve to zero.
pub trait EnumValue: Clone + PartialEq + Debug + Display {
    /// Whether this is the type's zero value.
    fn is_zero(&self) -> bool;

    /// Builds a value from an (already cased) field name, if the type supports it.
    fn from_field_name(name: &str) -> Option<Self> {
        let _ = name;
        None
    }

    /// Whether this member value matches `value` in a membership query.
    ///
    /// Defaults to `==`. Every member must match itself.
    fn matches<Q>(&self, value: &Q) -> bool
    where
        Self: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        Borrow::<Q>::borrow(self) == value
    }
}

impl EnumValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn from_field_name(name: &str) -> Option<Self> {
        Some(name.to_owned())
    }
}

impl EnumValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl EnumValue for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

macro_rules! impl_numeric_value {
    ($zero:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl EnumValue for $ty {
                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

// NaN never equals itself, so a NaN member matches any NaN.
macro_rules! impl_float_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl EnumValue for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0.0
                }

                fn matches<Q>(&self, value: &Q) -> bool
                where
                    Self: Borrow<Q>,
                    Q: PartialEq + ?Sized,
                {
                    Borrow::<Q>::borrow(self) == value || (self.is_nan() && value.ne(value))
                }
            }
        )+
    };
}

impl_numeric_value!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_value!(f32, f64);
