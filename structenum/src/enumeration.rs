//! The constructed enum and its query surface.

use std::borrow::Borrow;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::builder::EnumBuilder;
use crate::error::{EnumError, StructenumResult};
use crate::options::EnumOption;
use crate::record::{EnumRecord, TypeDescriptor};
use crate::value::EnumValue;

/// A populated record together with its ordered value set.
///
/// Derefs to the record, so members are read as fields (`meal.Veg`). There is
/// no mutable access: the record and its values are fixed once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Enum<T: EnumRecord> {
    record: T,
    values: Vec<T::Value>,
    descriptor: TypeDescriptor,
}

impl<T: EnumRecord> Enum<T> {
    /// Construct with default options (field names used as written).
    pub fn new(record: T) -> Self {
        EnumBuilder::new(record).build()
    }

    /// Construct, applying `options` in order.
    pub fn with_options<I>(record: T, options: I) -> Self
    where
        I: IntoIterator<Item = EnumOption>,
    {
        EnumBuilder::new(record).with_options(options).build()
    }

    /// Start a fluent construction.
    pub fn builder(record: T) -> EnumBuilder<T> {
        EnumBuilder::new(record)
    }

    pub(crate) fn from_parts(record: T, values: Vec<T::Value>, descriptor: TypeDescriptor) -> Self {
        Self {
            record,
            values,
            descriptor,
        }
    }

    /// All member values in declaration order.
    pub fn list_values(&self) -> &[T::Value] {
        &self.values
    }

    /// Whether `value` matches any member value.
    ///
    /// Matching is [`EnumValue::matches`], so every value in
    /// [`list_values`](Self::list_values) is valid, NaN included.
    pub fn is_valid<Q>(&self, value: &Q) -> bool
    where
        T::Value: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.values.iter().any(|v| v.matches(value))
    }

    /// `Ok(())` if `value` is a member, otherwise an [`EnumError::InvalidValue`]
    /// naming the type, the value and the full value set.
    pub fn validate<Q>(&self, value: &Q) -> StructenumResult<()>
    where
        T::Value: Borrow<Q>,
        Q: PartialEq + std::fmt::Display + ?Sized,
    {
        if self.is_valid(value) {
            return Ok(());
        }
        Err(EnumError::invalid_value(
            self.descriptor.display_name(),
            value,
            self.values.as_slice(),
        ))
    }

    /// Member `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> Members<'_, T::Value> {
        Members {
            names: T::FIELD_NAMES.iter(),
            values: self.values.iter(),
        }
    }

    /// Member names in declaration order.
    pub fn names(&self) -> &'static [&'static str] {
        T::FIELD_NAMES
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        self.descriptor
    }

    pub fn record(&self) -> &T {
        &self.record
    }

    pub fn into_record(self) -> T {
        self.record
    }
}

impl<T: EnumRecord> Deref for Enum<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.record
    }
}

impl<'a, T: EnumRecord> IntoIterator for &'a Enum<T> {
    type Item = (&'static str, &'a T::Value);
    type IntoIter = Members<'a, T::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(name, value)` pairs of an [`Enum`].
#[derive(Debug, Clone)]
pub struct Members<'a, V> {
    names: std::slice::Iter<'static, &'static str>,
    values: std::slice::Iter<'a, V>,
}

impl<'a, V> Iterator for Members<'a, V> {
    type Item = (&'static str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        Some((*self.names.next()?, self.values.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<V> ExactSizeIterator for Members<'_, V> {}

impl<T> Serialize for Enum<T>
where
    T: EnumRecord + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}

/// Decodes the record, then constructs it with default options.
impl<'de, T> Deserialize<'de> for Enum<T>
where
    T: EnumRecord + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Enum::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Levels {
        low: i32,
        high: i32,
    }

    impl EnumRecord for Levels {
        type Value = i32;
        const TYPE_NAME: &'static str = "Levels";
        const FIELD_NAMES: &'static [&'static str] = &["low", "high"];

        fn resolve_fields<F>(self, mut resolve: F) -> Self
        where
            F: FnMut(&'static str, i32) -> i32,
        {
            Self {
                low: resolve("low", self.low),
                high: resolve("high", self.high),
            }
        }
    }

    #[test]
    fn test_queries_on_manual_record() {
        let levels = Enum::new(Levels { low: 1, high: 9 });
        assert_eq!(levels.list_values(), [1, 9]);
        assert_eq!(levels.high, 9);
        assert!(levels.is_valid(&1));
        assert!(!levels.is_valid(&5));
        assert_eq!(levels.len(), 2);
        assert!(!levels.is_empty());
    }

    #[test]
    fn test_validate_reports_trimmed_name() {
        let levels = Enum::new(Levels { low: 1, high: 9 });
        assert!(levels.validate(&9).is_ok());
        let err = levels.validate(&5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for type Level: 5. Valid values include: [1 9]"
        );
    }

    #[test]
    fn test_members_iter() {
        let levels = Enum::new(Levels { low: 1, high: 9 });
        let pairs: Vec<_> = levels.iter().collect();
        assert_eq!(pairs, vec![("low", &1), ("high", &9)]);
        assert_eq!(levels.iter().len(), 2);
        assert_eq!((&levels).into_iter().count(), 2);
    }

    #[test]
    fn test_into_record() {
        let levels = Enum::new(Levels::default());
        assert_eq!(levels.descriptor().name(), "Levels");
        assert_eq!(levels.into_record(), Levels { low: 0, high: 0 });
    }
}
