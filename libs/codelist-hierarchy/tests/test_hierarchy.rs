//! Hierarchy construction and grouping queries as the display layer
//! consumes them.

mod test_support;

use openlists_hierarchy::{Code, Hierarchy};
use test_support::{codes, coding_system, full_hierarchy};

#[test]
fn a_draft_sees_ancestors_and_descendants_of_its_codes() {
    let hierarchy = Hierarchy::from_codes(&coding_system(), &codes(&["d", "f"])).unwrap();

    // Up to the root through b and c, down to the leaves of each branch,
    // but nothing reachable only through e.
    assert_eq!(
        hierarchy.nodes(),
        &codes(&["a", "b", "c", "d", "f", "g", "h", "i", "j"])
    );
}

#[test]
fn parent_and_child_maps_are_inverses() {
    let hierarchy = full_hierarchy();
    for (child, parents) in hierarchy.parent_map() {
        for parent in parents {
            assert!(
                hierarchy.child_map()[parent].contains(child),
                "edge {parent} -> {child} missing from child_map"
            );
        }
    }
    for (parent, children) in hierarchy.child_map() {
        for child in children {
            assert!(
                hierarchy.parent_map()[child].contains(parent),
                "edge {parent} -> {child} missing from parent_map"
            );
        }
    }
}

#[test]
fn grouping_a_whole_draft_yields_one_root() {
    let hierarchy = full_hierarchy();
    let roots = hierarchy.filter_to_ultimate_ancestors(hierarchy.nodes());
    assert_eq!(roots, codes(&["a"]));
}

#[test]
fn grouping_search_results_drops_codes_covered_by_other_results() {
    let hierarchy = full_hierarchy();
    // A search for "elbow" might surface c, e, h, i, j.
    let displayed = codes(&["c", "e", "h", "i", "j"]);
    assert_eq!(
        hierarchy.filter_to_ultimate_ancestors(&displayed),
        codes(&["c"])
    );
}

#[test]
fn a_code_with_an_out_of_set_ancestor_path_is_still_covered() {
    let hierarchy = full_hierarchy();
    // h's parents d and e are outside the set, but b covers it via both.
    let displayed = codes(&["b", "h"]);
    assert_eq!(
        hierarchy.filter_to_ultimate_ancestors(&displayed),
        codes(&["b"])
    );
}

#[test]
fn descendant_queries_stay_inside_the_restricted_graph() {
    let hierarchy = Hierarchy::from_codes(&coding_system(), &codes(&["e"])).unwrap();
    // In the full ontology c also reaches f and j; here only e's branch
    // is present.
    assert_eq!(hierarchy.descendants(&Code::new("c")), codes(&["e", "h", "i"]));
}
