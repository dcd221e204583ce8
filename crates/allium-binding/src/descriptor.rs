//! The opaque grammar descriptor and its accessor.
//!
//! A tree-sitter grammar compiles to a static `TSLanguage` table inside the
//! generated `parser.c`, reachable through a single C accessor such as
//! `tree_sitter_allium()`. This module models the three pieces the adapter
//! needs: the opaque type, the accessor, and a checked non-owning reference.
#![allow(unsafe_code)]

use std::fmt;
use std::marker::{PhantomData, PhantomPinned};
use std::ptr::NonNull;

use crate::error::LinkageError;

/// The compiled grammar tables, as laid out by the tree-sitter runtime.
///
/// The layout is private to the grammar engine. This type can only be named
/// behind a pointer: it cannot be constructed, moved or sent by value.
#[repr(C)]
pub struct TSLanguage {
    _private: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

/// A grammar's descriptor accessor.
///
/// The accessor must return the same immutable, process-lifetime descriptor
/// on every call. It may be called any number of times from any thread.
#[derive(Clone, Copy)]
pub struct LanguageFn(unsafe extern "C" fn() -> *const TSLanguage);

impl LanguageFn {
    /// Wraps a raw accessor.
    ///
    /// # Safety
    ///
    /// `accessor` must be callable with no arguments at any time and must
    /// return either null or the address of a `TSLanguage` that stays valid
    /// and unmodified for the rest of the process.
    #[must_use]
    pub const unsafe fn from_raw(accessor: unsafe extern "C" fn() -> *const TSLanguage) -> Self {
        Self(accessor)
    }

    /// Calls the accessor and checks the result.
    ///
    /// `symbol` names the accessor for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`LinkageError::NullDescriptor`] if the accessor yields null.
    pub fn descriptor(self, symbol: &'static str) -> Result<Descriptor, LinkageError> {
        // SAFETY: the contract of `from_raw` makes the call itself sound.
        let raw = unsafe { (self.0)() };
        NonNull::new(raw.cast_mut())
            .map(Descriptor)
            .ok_or(LinkageError::NullDescriptor { symbol })
    }
}

impl fmt::Debug for LanguageFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LanguageFn(..)")
    }
}

/// A non-owning, non-null reference to a grammar descriptor.
///
/// Two descriptors compare equal exactly when they point at the same table.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor(NonNull<TSLanguage>);

// SAFETY: the descriptor is immutable after the grammar engine's static
// initialization and lives for the whole process.
unsafe impl Send for Descriptor {}
// SAFETY: see above; shared reads need no synchronization.
unsafe impl Sync for Descriptor {}

impl Descriptor {
    /// Returns the descriptor's address.
    #[must_use]
    pub fn as_ptr(self) -> *const TSLanguage {
        self.0.as_ptr().cast_const()
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Descriptor(..)")
    }
}
