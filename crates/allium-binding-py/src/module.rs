//! Python module as an export table.
#![allow(unsafe_code)]

use std::ffi::c_void;

use allium_binding::{Export, ExportTable, LanguageFactory, LanguageHandle, LinkageError};
use pyo3::exceptions::{PyImportError, PyTypeError};
use pyo3::prelude::*;
use pyo3::types::{PyCFunction, PyCapsule, PyDict, PyTuple};

/// Exports registered as plain module attributes.
///
/// Attributes are set directly rather than through `PyModule::add`, so
/// re-registering a key does not grow `__all__`.
pub struct ModuleExports<'a, 'py>(pub &'a Bound<'py, PyModule>);

impl ExportTable for ModuleExports<'_, '_> {
    type Error = PyErr;

    fn set(&mut self, key: &'static str, value: Export) -> PyResult<()> {
        match value {
            Export::Name(name) => self.0.setattr(key, name),
            Export::Language(factory) => {
                let function = language_function(self.0.py(), factory)?;
                self.0.setattr(key, function)
            }
        }
    }
}

fn language_function(py: Python<'_>, factory: LanguageFactory) -> PyResult<Bound<'_, PyCFunction>> {
    PyCFunction::new_closure(
        py,
        Some(c"language"),
        Some(c"Get the tree-sitter language for this grammar."),
        move |args: &Bound<'_, PyTuple>,
              kwargs: Option<&Bound<'_, PyDict>>|
              -> PyResult<Py<PyCapsule>> {
            if !args.is_empty() || kwargs.is_some_and(|kw| !kw.is_empty()) {
                return Err(PyTypeError::new_err("language() takes no arguments"));
            }
            let handle = factory.call().map_err(linkage_error)?;
            Ok(into_capsule(args.py(), handle)?.unbind())
        },
    )
}

/// Wraps a handle as a `tree_sitter.Language` capsule.
///
/// The capsule's pointer is the descriptor address itself, which is what the
/// `tree_sitter` package unwraps. No destructor is attached: the descriptor
/// is owned by the grammar engine.
fn into_capsule(py: Python<'_>, handle: LanguageHandle) -> PyResult<Bound<'_, PyCapsule>> {
    let pointer = handle.as_ptr().cast_mut().cast::<c_void>();
    // SAFETY: `pointer` is non-null and the capsule name is a static C string.
    let capsule = unsafe {
        let raw = pyo3::ffi::PyCapsule_New(pointer, LanguageHandle::TAG.as_ptr(), None);
        Bound::from_owned_ptr_or_err(py, raw)?
    };
    Ok(capsule.downcast_into::<PyCapsule>()?)
}

/// Surfaces a linkage failure as an import error naming the symbol.
pub fn linkage_error(err: LinkageError) -> PyErr {
    PyImportError::new_err(err.to_string())
}
