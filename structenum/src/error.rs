//! Typed error handling for structenum.
//!
//! Malformed record shapes are rejected at compile time by the derive macro,
//! so the only runtime failure is a value outside the closed set.

use std::fmt::Display;
use thiserror::Error;

/// Main error type for structenum operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    /// A value is not a member of the enum
    #[error(
        "invalid value for type {type_name}: {value}. Valid values include: {}",
        format_values(.valid)
    )]
    InvalidValue {
        /// Record type name with its trailing `s` trimmed
        type_name: String,
        /// The rejected value, rendered with `Display`
        value: String,
        /// Every member value in declaration order, rendered with `Display`
        valid: Vec<String>,
    },
}

impl EnumError {
    /// Create an invalid-value error from the rejected value and the full value set.
    pub fn invalid_value<Q, V>(type_name: impl Into<String>, value: &Q, valid: &[V]) -> Self
    where
        Q: Display + ?Sized,
        V: Display,
    {
        Self::InvalidValue {
            type_name: type_name.into(),
            value: value.to_string(),
            valid: valid.iter().map(ToString::to_string).collect(),
        }
    }

    /// Get the type name associated with this error.
    pub fn type_name(&self) -> &str {
        match self {
            Self::InvalidValue { type_name, .. } => type_name,
        }
    }
}

/// Convenience type alias for structenum results.
pub type StructenumResult<T> = Result<T, EnumError>;

/// Renders values as `[a b c]`.
fn format_values(values: &[String]) -> String {
    format!("[{}]", values.join(" "))
}
