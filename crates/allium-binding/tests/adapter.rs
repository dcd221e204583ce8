//! End-to-end behaviour of the adapter against an in-memory export table.
#![allow(unsafe_code, missing_docs)]

use std::collections::HashSet;

use allium_binding::{
    Adapter, Export, ExportMap, InitError, LanguageFn, LanguageHandle, LinkageError, TSLanguage,
    LANGUAGE_KEY, NAME_KEY,
};
use proptest::prelude::*;

static GRAMMAR: [u64; 4] = [0; 4];

extern "C" fn tree_sitter_fixture() -> *const TSLanguage {
    GRAMMAR.as_ptr().cast()
}

extern "C" fn tree_sitter_broken() -> *const TSLanguage {
    std::ptr::null()
}

// SAFETY: the accessor returns the address of a static array.
const FIXTURE: Adapter = Adapter::new("fixture", "tree_sitter_fixture", unsafe {
    LanguageFn::from_raw(tree_sitter_fixture)
});

// SAFETY: the accessor only ever returns null.
const BROKEN: Adapter = Adapter::new("broken", "tree_sitter_broken", unsafe {
    LanguageFn::from_raw(tree_sitter_broken)
});

fn call_language(map: &ExportMap) -> LanguageHandle {
    map.get(LANGUAGE_KEY)
        .and_then(Export::as_language)
        .expect("language export")
        .call()
        .expect("linked descriptor")
}

#[test]
fn fresh_load_exposes_name_and_stable_language() {
    let mut exports = ExportMap::new();
    FIXTURE.initialize(&mut exports).unwrap();

    assert_eq!(FIXTURE.name(), "fixture");
    assert_eq!(
        exports.get(NAME_KEY).and_then(Export::as_name),
        Some("fixture")
    );

    let first = call_language(&exports);
    let second = call_language(&exports);
    assert!(first.same_descriptor(&second));
    assert_eq!(first.as_ptr(), tree_sitter_fixture());
}

#[test]
fn initialize_registers_exactly_two_keys() {
    let mut exports = ExportMap::new();
    FIXTURE.initialize(&mut exports).unwrap();

    let keys: Vec<_> = exports.keys().collect();
    assert_eq!(keys, vec![LANGUAGE_KEY, NAME_KEY]);
}

#[test]
fn initialize_twice_is_equivalent_to_once() {
    let mut once = ExportMap::new();
    FIXTURE.initialize(&mut once).unwrap();

    let mut twice = ExportMap::new();
    FIXTURE.initialize(&mut twice).unwrap();
    FIXTURE.initialize(&mut twice).unwrap();

    assert_eq!(twice.len(), 2);
    assert_eq!(
        once.keys().collect::<Vec<_>>(),
        twice.keys().collect::<Vec<_>>()
    );
    assert_eq!(
        once.get(NAME_KEY).and_then(Export::as_name),
        twice.get(NAME_KEY).and_then(Export::as_name)
    );
    assert_eq!(call_language(&once), call_language(&twice));
}

#[test]
fn name_does_not_depend_on_call_order() {
    let before = FIXTURE.name();
    let _ = FIXTURE.language_handle().unwrap();
    let after = FIXTURE.name();

    assert_eq!(before, "fixture");
    assert_eq!(before, after);
}

#[test]
fn unresolved_accessor_fails_load_and_leaves_table_empty() {
    let adapter = Adapter::unlinked("allium", "tree_sitter_allium");
    let mut exports = ExportMap::new();

    let err = adapter.initialize(&mut exports).unwrap_err();

    assert!(matches!(
        err,
        InitError::Linkage(LinkageError::Unresolved {
            symbol: "tree_sitter_allium"
        })
    ));
    assert!(err.to_string().contains("tree_sitter_allium"));
    assert!(exports.is_empty());
}

#[test]
fn null_descriptor_fails_load_and_leaves_table_empty() {
    let mut exports = ExportMap::new();

    let err = BROKEN.initialize(&mut exports).unwrap_err();

    assert!(err.to_string().contains("tree_sitter_broken"));
    assert!(exports.is_empty());
}

#[test]
fn handles_are_shareable_across_threads() {
    let handles: Vec<LanguageHandle> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| FIXTURE.language_handle().unwrap()))
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    let distinct: HashSet<_> = handles.into_iter().collect();
    assert_eq!(distinct.len(), 1);
}

proptest! {
    #[test]
    fn every_factory_call_wraps_the_same_descriptor(calls in 1usize..64) {
        let mut exports = ExportMap::new();
        FIXTURE.initialize(&mut exports).unwrap();
        let expected = FIXTURE.language_handle().unwrap();

        for _ in 0..calls {
            let handle = call_language(&exports);
            prop_assert!(handle.same_descriptor(&expected));
            prop_assert_eq!(handle.as_ptr(), expected.as_ptr());
        }
    }
}
