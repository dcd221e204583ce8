//! Opaque handles handed across the host boundary.

use std::ffi::CStr;
use std::fmt;

use crate::descriptor::{Descriptor, TSLanguage};

/// A boundary-safe reference to a grammar descriptor.
///
/// A handle carries the descriptor's address and a type tag and nothing else.
/// Application code should treat it as opaque and pass it to the host
/// runtime's parser-construction API untouched. Handles are cheap to create;
/// none of them owns the descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageHandle {
    descriptor: Descriptor,
}

impl LanguageHandle {
    /// Type tag understood by tree-sitter hosts.
    ///
    /// The Python `tree_sitter` package only accepts capsules carrying this name.
    pub const TAG: &'static CStr = c"tree_sitter.Language";

    /// Wraps a descriptor.
    #[must_use]
    pub fn new(descriptor: Descriptor) -> Self {
        Self { descriptor }
    }

    /// Returns the handle's type tag.
    #[must_use]
    pub fn tag(&self) -> &'static CStr {
        Self::TAG
    }

    /// Returns `true` if both handles reference the same descriptor.
    #[must_use]
    pub fn same_descriptor(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns the wrapped address for host glue code.
    ///
    /// The pointee must never be read or written from Rust; only the grammar
    /// engine understands it.
    #[must_use]
    pub fn as_ptr(&self) -> *const TSLanguage {
        self.descriptor.as_ptr()
    }
}

impl fmt::Debug for LanguageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageHandle")
            .field("tag", &Self::TAG)
            .finish_non_exhaustive()
    }
}
