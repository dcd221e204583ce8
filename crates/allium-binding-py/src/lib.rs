//! Python extension exposing the `allium` tree-sitter grammar.
//!
//! Importing `tree_sitter_allium._binding` registers `name` and `language`;
//! `tree_sitter.Language(language())` then builds a usable language.

use allium_binding::InitError;
use pyo3::prelude::*;

mod grammar;
mod module;

use module::{linkage_error, ModuleExports};

#[pymodule]
fn _binding(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let mut exports = ModuleExports(m);
    match grammar::ADAPTER.initialize(&mut exports) {
        Ok(_) => Ok(()),
        Err(InitError::Linkage(err)) => Err(linkage_error(err)),
        Err(InitError::Export { key, source }) => {
            tracing::error!(key, grammar = grammar::NAME, "failed to register export");
            Err(source)
        }
    }
}
