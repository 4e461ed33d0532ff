//! Builder pattern API for constructing enums.
//!
//! ```rust
//! use structenum::{Enum, EnumRecord};
//!
//! #[derive(Default, EnumRecord)]
//! struct Colors {
//!     red: String,
//!     green: String,
//! }
//!
//! let colors = Enum::builder(Colors::default())
//!     .lowercase()
//!     .build();
//!
//! assert_eq!(colors.list_values(), ["red", "green"]);
//! ```

use tracing::debug;

use crate::enumeration::Enum;
use crate::options::{self, Casing, EnumOption, Options};
use crate::record::{EnumRecord, TypeDescriptor};
use crate::value::EnumValue;

/// Builder for configuring enum construction.
#[derive(Debug)]
pub struct EnumBuilder<T: EnumRecord> {
    /// Record as supplied by the caller, possibly partially filled
    record: T,

    /// Options applied in order when `build` runs
    options: Vec<EnumOption>,
}

impl<T: EnumRecord> EnumBuilder<T> {
    pub fn new(record: T) -> Self {
        Self {
            record,
            options: Vec::new(),
        }
    }

    /// Add a construction option.
    pub fn with_option(mut self, option: EnumOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add several construction options, in order.
    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = EnumOption>,
    {
        self.options.extend(options);
        self
    }

    /// Shorthand for `with_option(lowercase())`.
    pub fn lowercase(self) -> Self {
        self.with_option(options::lowercase())
    }

    /// Shorthand for `with_option(uppercase())`.
    pub fn uppercase(self) -> Self {
        self.with_option(options::uppercase())
    }

    /// Resolve every member and return the populated enum.
    pub fn build(self) -> Enum<T> {
        let opts = Options::from_options(&self.options);
        let casing = opts.casing();

        let mut values = Vec::with_capacity(T::FIELD_NAMES.len());
        let record = self.record.resolve_fields(|name, current| {
            let resolved = resolve_value(name, current, casing);
            values.push(resolved.clone());
            resolved
        });
        debug_assert_eq!(
            values.len(),
            T::FIELD_NAMES.len(),
            "resolve_fields must visit every member exactly once"
        );

        let descriptor = TypeDescriptor::of::<T>();
        debug!(
            type_name = descriptor.name(),
            members = values.len(),
            casing = %casing,
            "constructed enum"
        );

        Enum::from_parts(record, values, descriptor)
    }
}

/// Resolves one member's effective value.
///
/// An explicit (non-zero) value always wins. A zero value is replaced by the
/// cased field name when the scalar supports it and kept as zero otherwise.
pub fn resolve_value<V: EnumValue>(name: &str, current: V, casing: Casing) -> V {
    if !current.is_zero() {
        return current;
    }
    V::from_field_name(&casing.apply(name)).unwrap_or(current)
}
