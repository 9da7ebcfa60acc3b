//! Test suite for module paths and hierarchy navigation
//!
//! Tests cover:
//! - Parent lookup at every depth
//! - Ancestor chains
//! - Termination at the root
//! - Value semantics (hashing, ordering, serde)

use super::*;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

// ============================================================================
// get_parent Tests
// ============================================================================

#[test]
fn test_get_parent_empty() {
    let module = Module::new("");
    let parent = get_parent(&module);
    assert_eq!(parent, Module::new(""));
    assert_eq!(parent.as_str(), "");
}

#[test]
fn test_get_parent_simple_module() {
    let module = Module::new("toto");
    assert_eq!(get_parent(&module), Module::new(""));
}

#[test]
fn test_get_parent_nested_module() {
    let module = Module::new("toto.tata");
    assert_eq!(get_parent(&module), Module::new("toto"));
}

#[test]
fn test_get_parent_long_nested_module() {
    let module = Module::new("toto.titi.tete.tata");
    assert_eq!(get_parent(&module), Module::new("toto.titi.tete"));
}

#[test]
fn test_get_parent_keeps_wildcards() {
    assert_eq!(get_parent(&Module::new("toto*.ta?a%")), Module::new("toto*"));
}

#[test]
fn test_get_parent_degenerate_separators() {
    assert_eq!(get_parent(&Module::new(".toto")), Module::root());
    assert_eq!(get_parent(&Module::new("toto.")), Module::new("toto"));
    assert_eq!(get_parent(&Module::new(".")), Module::root());
}

#[test]
fn test_parent_method_matches_free_function() {
    let module = Module::new("toto.titi.tata");
    assert_eq!(module.parent(), get_parent(&module));
}

// ============================================================================
// Ancestor Tests
// ============================================================================

#[test]
fn test_ancestors_nearest_first() {
    let module = Module::new("toto.titi.tete.tata");
    let chain: Vec<Module> = module.ancestors().collect();

    assert_eq!(
        chain,
        vec![
            Module::new("toto.titi.tete"),
            Module::new("toto.titi"),
            Module::new("toto"),
            Module::root(),
        ]
    );
}

#[test]
fn test_ancestors_of_root_is_empty() {
    assert_eq!(Module::root().ancestors().count(), 0);
}

#[test]
fn test_ancestors_of_top_level_module() {
    let chain: Vec<Module> = Module::new("toto").ancestors().collect();
    assert_eq!(chain, vec![Module::root()]);
}

// ============================================================================
// Value Semantics Tests
// ============================================================================

#[test]
fn test_module_as_map_key() {
    let mut owners = HashMap::new();
    owners.insert(Module::new("toto.tata"), "team-a");
    owners.insert(Module::new("toto.titi"), "team-b");

    assert_eq!(owners.get(&Module::new("toto.tata")), Some(&"team-a"));
    assert_eq!(owners.get("toto.titi"), Some(&"team-b"));
    assert_eq!(owners.get("toto"), None);
}

#[test]
fn test_equal_paths_are_interchangeable() {
    let modules: HashSet<Module> = ["toto", "toto", "toto.tata"]
        .into_iter()
        .map(Module::from)
        .collect();
    assert_eq!(modules.len(), 2);
}

#[test]
fn test_ordering_follows_path() {
    let mut modules = vec![
        Module::new("toto.tata"),
        Module::new(""),
        Module::new("titi"),
        Module::new("toto"),
    ];
    modules.sort();

    let sorted: Vec<&str> = modules.iter().map(Module::as_str).collect();
    assert_eq!(sorted, vec!["", "titi", "toto", "toto.tata"]);
}

#[test]
fn test_serde_as_plain_string() {
    let module = Module::new("toto.tata%");
    let json = serde_json::to_string(&module).unwrap();
    assert_eq!(json, "\"toto.tata%\"");

    let rules: Vec<Module> = serde_json::from_str(r#"["toto", "toto.*"]"#).unwrap();
    assert_eq!(rules, vec![Module::new("toto"), Module::new("toto.*")]);
}

#[test]
fn test_module_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Module>();
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_parent_walk_terminates_at_root(path in "[a-z_.?*%]{0,40}") {
        let module = Module::new(path);
        let mut current = module.clone();

        for _ in 0..module.depth() {
            current = get_parent(&current);
        }

        prop_assert_eq!(&current, &Module::root());
        prop_assert_eq!(get_parent(&current), Module::root());
    }

    #[test]
    fn prop_parent_is_strictly_shorter(path in "[a-z]{1,8}(\\.[a-z]{1,8}){0,6}") {
        let module = Module::new(path);
        let parent = get_parent(&module);

        prop_assert!(parent.as_str().len() < module.as_str().len());
        prop_assert_eq!(parent.depth() + 1, module.depth());
        prop_assert!(parent.is_parent_of(&module));
    }

    #[test]
    fn prop_ancestor_count_equals_depth(path in "[a-z]{1,8}(\\.[a-z]{1,8}){0,6}") {
        let module = Module::new(path);
        prop_assert_eq!(module.ancestors().count(), module.depth());
    }
}
