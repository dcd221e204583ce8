//! Link setup for the `_binding` extension module.

use std::env;

fn main() {
    pyo3_build_config::add_extension_module_link_args();

    println!("cargo:rerun-if-env-changed=ALLIUM_GRAMMAR_LIB_DIR");
    if env::var_os("CARGO_FEATURE_GRAMMAR").is_none() {
        return;
    }

    // Without a prebuilt archive the accessor stays undefined and the
    // interpreter reports the missing symbol at import time.
    if let Some(dir) = env::var_os("ALLIUM_GRAMMAR_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
        println!("cargo:rustc-link-lib=static=tree-sitter-allium");
    }
}
