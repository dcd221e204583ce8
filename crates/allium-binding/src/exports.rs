//! Export tables.
//!
//! A host runtime hands the adapter a mutable table when it loads the
//! extension. [`ExportTable`] abstracts over that table so the registration
//! logic can run against a real host module or against [`ExportMap`] in tests
//! and Rust-side hosts.

use std::collections::BTreeMap;
use std::convert::Infallible;

use crate::adapter::LanguageFactory;

/// Key under which the grammar name is exported.
pub const NAME_KEY: &str = "name";

/// Key under which the language factory is exported.
pub const LANGUAGE_KEY: &str = "language";

/// A value registered by the adapter.
#[derive(Debug, Clone, Copy)]
pub enum Export {
    /// The constant grammar identifier.
    Name(&'static str),

    /// The zero-argument factory producing [`LanguageHandle`](crate::LanguageHandle)s.
    Language(LanguageFactory),
}

impl Export {
    /// Returns the grammar name if this is a [`Export::Name`].
    #[must_use]
    pub fn as_name(&self) -> Option<&'static str> {
        match self {
            Export::Name(name) => Some(name),
            Export::Language(_) => None,
        }
    }

    /// Returns the factory if this is a [`Export::Language`].
    #[must_use]
    pub fn as_language(&self) -> Option<LanguageFactory> {
        match self {
            Export::Language(factory) => Some(*factory),
            Export::Name(_) => None,
        }
    }
}

/// A host-provided table the adapter registers its exports on.
///
/// Setting a key that already exists must replace its value, so that repeated
/// initialization leaves one entry per key.
pub trait ExportTable {
    /// Error reported by the host when an entry cannot be stored.
    type Error;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns the host's error if the entry cannot be stored.
    fn set(&mut self, key: &'static str, value: Export) -> Result<(), Self::Error>;
}

/// An in-memory export table.
#[derive(Debug, Default)]
pub struct ExportMap {
    entries: BTreeMap<&'static str, Export>,
}

impl ExportMap {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an export by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Export> {
        self.entries.get(key)
    }

    /// Iterates over the registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Returns the number of registered exports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ExportTable for ExportMap {
    type Error = Infallible;

    fn set(&mut self, key: &'static str, value: Export) -> Result<(), Self::Error> {
        self.entries.insert(key, value);
        Ok(())
    }
}
