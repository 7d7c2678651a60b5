#![allow(dead_code)]

use openlists_hierarchy::{Code, Hierarchy, InMemoryCodingSystem, Status, StatusMap};
use std::collections::BTreeSet;

/// A small DAG with multi-parent nodes, modelled on a disease hierarchy:
///
/// ```text
///        a
///       / \
///      b   c
///     / \ / \
///    d   e   f
///   / \ / \ / \
///  g   h   i   j
/// ```
pub fn coding_system() -> InMemoryCodingSystem {
    let mut system = InMemoryCodingSystem::new("snomedct", "SNOMED CT");
    for (code, term) in [
        ("a", "Disorder of limb"),
        ("b", "Disorder of arm"),
        ("c", "Disorder of elbow region"),
        ("d", "Arthropathy of arm"),
        ("e", "Disorder of elbow"),
        ("f", "Injury of elbow region"),
        ("g", "Arthritis of shoulder"),
        ("h", "Arthritis of elbow"),
        ("i", "Epicondylitis"),
        ("j", "Fracture of elbow"),
    ] {
        system.insert_concept(code, term);
    }
    for (parent, child) in [
        ("a", "b"),
        ("a", "c"),
        ("b", "d"),
        ("b", "e"),
        ("c", "e"),
        ("c", "f"),
        ("d", "g"),
        ("d", "h"),
        ("e", "h"),
        ("e", "i"),
        ("f", "i"),
        ("f", "j"),
    ] {
        system.insert_edge(parent, child);
    }
    system
}

pub fn full_hierarchy() -> Hierarchy {
    Hierarchy::from_codes(&coding_system(), &codes(&["a"])).unwrap()
}

pub fn codes(names: &[&str]) -> BTreeSet<Code> {
    names.iter().map(|&name| Code::new(name)).collect()
}

pub fn status_map(entries: &[(&str, Status)]) -> StatusMap {
    entries
        .iter()
        .map(|&(code, status)| (Code::new(code), status))
        .collect()
}
