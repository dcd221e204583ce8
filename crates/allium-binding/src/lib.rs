//! Host-agnostic adapter for handing the `allium` grammar descriptor to a host runtime.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::multiple_crate_versions)]

/// The opaque grammar descriptor and the accessor that produces it.
///
/// Everything here treats the descriptor as an address owned by the external
/// grammar engine. Nothing in this crate reads through it.
pub mod descriptor;

/// Boundary-safe handles wrapping a descriptor address.
pub mod handle;

/// Export tables: what a loaded module registers and where it registers it.
pub mod exports;

/// The adapter itself: name, factory and module initialization.
pub mod adapter;

/// Linkage and registration failures.
pub mod error;

pub use adapter::{Adapter, LanguageFactory};
pub use descriptor::{Descriptor, LanguageFn, TSLanguage};
pub use error::{InitError, LinkageError};
pub use exports::{Export, ExportMap, ExportTable, LANGUAGE_KEY, NAME_KEY};
pub use handle::LanguageHandle;
