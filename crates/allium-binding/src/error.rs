//! Error types for the descriptor adapter.
//!
//! Linkage is the only thing that can go wrong inside the adapter. Hosts may
//! additionally fail to accept an export, which is reported through
//! [`InitError::Export`] with the host's own error attached.

/// The external grammar engine could not provide a usable descriptor.
///
/// This always indicates a broken build or packaging of the extension and is
/// fatal for module loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LinkageError {
    /// The descriptor accessor was not linked into this build.
    #[error("unresolved grammar symbol `{symbol}`: the grammar engine is not linked into this module")]
    Unresolved {
        /// Name of the missing accessor symbol.
        symbol: &'static str,
    },

    /// The descriptor accessor returned a null descriptor.
    #[error("grammar symbol `{symbol}` returned a null descriptor (mismatched grammar build?)")]
    NullDescriptor {
        /// Name of the accessor that misbehaved.
        symbol: &'static str,
    },
}

impl LinkageError {
    /// Returns the accessor symbol this error is about.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            LinkageError::Unresolved { symbol } | LinkageError::NullDescriptor { symbol } => {
                symbol
            }
        }
    }
}

/// Failure while registering the adapter's exports on a host table.
#[derive(Debug, thiserror::Error)]
pub enum InitError<E> {
    /// The grammar descriptor could not be obtained; nothing was registered.
    #[error(transparent)]
    Linkage(#[from] LinkageError),

    /// The host table refused an entry.
    #[error("failed to register export `{key}`")]
    Export {
        /// Key that was being set.
        key: &'static str,
        /// Error reported by the host table.
        #[source]
        source: E,
    },
}
