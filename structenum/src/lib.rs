//! structenum: closed, type-safe enums derived from plain record structs.
//!
//! A record is an ordinary struct whose named fields are the members of the
//! enumeration. Every field shares one scalar type. Fields left at their zero
//! value are filled in from the field's name (text scalars only); fields with
//! an explicit value keep it. The result is an [`Enum`] that derefs to the
//! populated record and answers membership queries against the closed set of
//! values.
//!
//! # Quick Start
//!
//! ```rust
//! use structenum::{lowercase, Enum, EnumRecord};
//!
//! #[derive(Debug, Default, EnumRecord)]
//! #[allow(non_snake_case)]
//! struct MealPreferences {
//!     Veg: String,
//!     NonVeg: String,
//! }
//!
//! let meal = Enum::new(MealPreferences::default());
//! assert_eq!(meal.Veg, "Veg");
//! assert!(meal.is_valid("NonVeg"));
//! assert!(meal.validate("Vegan").is_err());
//!
//! let lower = Enum::with_options(MealPreferences::default(), [lowercase()]);
//! assert_eq!(lower.list_values(), ["veg", "nonveg"]);
//! ```
//!
//! # Module Organization
//!
//! - [`options`]: casing policy and the composable option values
//! - [`value`]: the scalar contract shared by all fields of a record
//! - [`record`]: the [`EnumRecord`] trait and the [`TypeDescriptor`]
//! - [`builder`]: field resolution and construction
//! - [`enumeration`]: the constructed [`Enum`] and its queries
//! - [`error`]: typed errors
//! - [`parallel`]: fan-out/join helper for independent test closures
//! - [`routing`]: versioned path prefixes
//!
//! # Cargo Features
//!
//! - `derive` (default): re-export `#[derive(EnumRecord)]`

pub mod builder;
pub mod enumeration;
pub mod error;
pub mod options;
pub mod parallel;
pub mod record;
pub mod routing;
pub mod value;

// ============================================================================
// Explicit Re-exports
// ============================================================================

pub use builder::{resolve_value, EnumBuilder};
pub use enumeration::{Enum, Members};
pub use error::{EnumError, StructenumResult};
pub use options::{lowercase, uppercase, Casing, EnumOption, Options};
pub use parallel::{ExecutionMode, ParallelGroup};
pub use record::{EnumRecord, TypeDescriptor};
pub use routing::versionable_prefix;
pub use value::EnumValue;

#[cfg(feature = "derive")]
pub use structenum_derive::EnumRecord;
