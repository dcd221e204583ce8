//! The `allium` grammar as linked into this extension.
#![allow(unsafe_code)]

use allium_binding::Adapter;
#[cfg(feature = "grammar")]
use allium_binding::{LanguageFn, TSLanguage};

/// Grammar identifier exported as `name`.
pub const NAME: &str = "allium";

/// C symbol of the generated descriptor accessor.
pub const SYMBOL: &str = "tree_sitter_allium";

#[cfg(feature = "grammar")]
extern "C" {
    fn tree_sitter_allium() -> *const TSLanguage;
}

/// The accessor generated by `tree-sitter generate` for this grammar.
#[cfg(feature = "grammar")]
// SAFETY: generated accessors return a pointer to a static table.
pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_allium) };

/// The adapter registered on the Python module.
#[cfg(feature = "grammar")]
pub static ADAPTER: Adapter = Adapter::new(NAME, SYMBOL, LANGUAGE);

/// The adapter registered on the Python module.
#[cfg(not(feature = "grammar"))]
pub static ADAPTER: Adapter = Adapter::unlinked(NAME, SYMBOL);
