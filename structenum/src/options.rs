//! Casing policy for name-derived values.
//!
//! Options are small values wrapping a function that edits a shared
//! [`Options`] struct. A fresh struct is created for every construction and
//! the options are applied to it in the order they were supplied, so when two
//! options touch the same setting the last one wins.

use std::fmt;

/// How a field name is turned into a text value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Casing {
    /// Use the field name as written.
    #[default]
    Identity,
    /// Lowercase the field name.
    Lowercase,
    /// Uppercase the field name.
    Uppercase,
}

impl Casing {
    /// Applies this casing to a field name.
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Identity => name.to_owned(),
            Self::Lowercase => name.to_lowercase(),
            Self::Uppercase => name.to_uppercase(),
        }
    }

    /// Parses a casing from its config/CLI spelling.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "identity" | "none" => Some(Self::Identity),
            "lowercase" | "lower" => Some(Self::Lowercase),
            "uppercase" | "upper" => Some(Self::Uppercase),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective configuration for one construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    casing: Casing,
}

impl Options {
    /// Builds the effective options from a sequence of option values.
    pub fn from_options<'a, I>(options: I) -> Self
    where
        I: IntoIterator<Item = &'a EnumOption>,
    {
        let mut opts = Self::default();
        for option in options {
            option.apply(&mut opts);
        }
        opts
    }

    pub fn casing(&self) -> Casing {
        self.casing
    }

    pub fn set_casing(&mut self, casing: Casing) -> &mut Self {
        self.casing = casing;
        self
    }
}

/// A composable construction option.
///
/// Custom rules can be written with [`EnumOption::new`]; the built-in ones are
/// [`lowercase`] and [`uppercase`].
pub struct EnumOption {
    label: &'static str,
    apply: Box<dyn Fn(&mut Options) + Send + Sync>,
}

impl EnumOption {
    pub fn new<F>(label: &'static str, apply: F) -> Self
    where
        F: Fn(&mut Options) + Send + Sync + 'static,
    {
        Self {
            label,
            apply: Box::new(apply),
        }
    }

    pub fn apply(&self, options: &mut Options) {
        (self.apply)(options);
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl fmt::Debug for EnumOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnumOption").field(&self.label).finish()
    }
}

/// Lowercase values derived from field names.
///
/// Overrides an earlier [`uppercase`].
pub fn lowercase() -> EnumOption {
    EnumOption::new("lowercase", |opts| {
        opts.set_casing(Casing::Lowercase);
    })
}

/// Uppercase values derived from field names.
///
/// Overrides an earlier [`lowercase`].
pub fn uppercase() -> EnumOption {
    EnumOption::new("uppercase", |opts| {
        opts.set_casing(Casing::Uppercase);
    })
}
