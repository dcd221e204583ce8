//! The language descriptor adapter.
//!
//! Every tree-sitter grammar ships the same adapter shape: a constant name and
//! a factory forwarding to the grammar's descriptor accessor. [`Adapter`]
//! captures that shape once; a binding crate only supplies the name, the
//! accessor symbol and the accessor itself.

use crate::descriptor::LanguageFn;
use crate::error::{InitError, LinkageError};
use crate::exports::{Export, ExportTable, LANGUAGE_KEY, NAME_KEY};
use crate::handle::LanguageHandle;

/// Registers a grammar's name and language factory on a host export table.
#[derive(Debug, Clone, Copy)]
pub struct Adapter {
    name: &'static str,
    symbol: &'static str,
    language: Option<LanguageFn>,
}

impl Adapter {
    /// Creates an adapter forwarding to a linked accessor.
    ///
    /// `symbol` is the accessor's C name, used in error messages.
    #[must_use]
    pub const fn new(name: &'static str, symbol: &'static str, language: LanguageFn) -> Self {
        Self {
            name,
            symbol,
            language: Some(language),
        }
    }

    /// Creates an adapter for a build where the grammar engine is not linked.
    ///
    /// Every descriptor request on such an adapter fails with
    /// [`LinkageError::Unresolved`].
    #[must_use]
    pub const fn unlinked(name: &'static str, symbol: &'static str) -> Self {
        Self {
            name,
            symbol,
            language: None,
        }
    }

    /// Returns the grammar identifier.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the name of the descriptor accessor symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Returns the factory registered under [`LANGUAGE_KEY`].
    ///
    /// # Errors
    ///
    /// Returns [`LinkageError::Unresolved`] if no accessor is linked.
    pub fn factory(&self) -> Result<LanguageFactory, LinkageError> {
        let language = self.language.ok_or(LinkageError::Unresolved {
            symbol: self.symbol,
        })?;

        Ok(LanguageFactory {
            language,
            symbol: self.symbol,
        })
    }

    /// Returns a fresh handle to the grammar descriptor.
    ///
    /// # Errors
    ///
    /// Returns a [`LinkageError`] if the accessor is missing or yields null.
    pub fn language_handle(&self) -> Result<LanguageHandle, LinkageError> {
        self.factory()?.call()
    }

    /// Registers [`NAME_KEY`] and [`LANGUAGE_KEY`] on `table` and hands it back.
    ///
    /// The descriptor is resolved before anything is written, so a linkage
    /// failure leaves `table` untouched. Calling this again on the same table
    /// overwrites both keys with equivalent values.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Linkage`] if the descriptor cannot be obtained, or
    /// [`InitError::Export`] if the host table rejects an entry.
    pub fn initialize<'t, T>(&self, table: &'t mut T) -> Result<&'t mut T, InitError<T::Error>>
    where
        T: ExportTable + ?Sized,
    {
        let factory = self
            .factory()
            .and_then(|factory| factory.call().map(|_| factory))
            .inspect_err(|err| {
                tracing::error!(symbol = self.symbol, %err, "grammar descriptor linkage failed");
            })?;

        table
            .set(NAME_KEY, Export::Name(self.name))
            .map_err(|source| InitError::Export {
                key: NAME_KEY,
                source,
            })?;
        table
            .set(LANGUAGE_KEY, Export::Language(factory))
            .map_err(|source| InitError::Export {
                key: LANGUAGE_KEY,
                source,
            })?;

        Ok(table)
    }
}

/// The zero-argument factory exported under [`LANGUAGE_KEY`].
///
/// It is `Copy`, `Send` and `'static`, so hosts can move it into whatever
/// callable representation they use.
#[derive(Debug, Clone, Copy)]
pub struct LanguageFactory {
    language: LanguageFn,
    symbol: &'static str,
}

impl LanguageFactory {
    /// Produces a new handle to the grammar descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`LinkageError::NullDescriptor`] if the accessor yields null.
    pub fn call(&self) -> Result<LanguageHandle, LinkageError> {
        self.language
            .descriptor(self.symbol)
            .map(LanguageHandle::new)
    }
}
