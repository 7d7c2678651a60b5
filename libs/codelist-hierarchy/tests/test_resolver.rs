//! End-to-end status propagation over a multi-parent DAG.

mod test_support;

use openlists_hierarchy::{Change, Code, Error, Hierarchy, Status, StatusMap, Update};
use test_support::{codes, coding_system, full_hierarchy, status_map};

#[test]
fn including_a_root_includes_everything_below() {
    let resolved = full_hierarchy()
        .update_node_to_status(&StatusMap::new(), &[Update::new("a", Change::Include)])
        .unwrap();

    assert_eq!(resolved[&Code::new("a")], Status::Included);
    for code in ["b", "c", "d", "e", "f", "g", "h", "i", "j"] {
        assert_eq!(resolved[&Code::new(code)], Status::IncludedByParent, "{code}");
    }
}

#[test]
fn excluding_a_branch_under_an_included_root_conflicts_where_paths_meet() {
    let hierarchy = full_hierarchy();
    let resolved = hierarchy
        .update_node_to_status(
            &StatusMap::new(),
            &[
                Update::new("a", Change::Include),
                Update::new("b", Change::Exclude),
            ],
        )
        .unwrap();

    // b's descendants that are reachable only through b are excluded.
    assert_eq!(resolved[&Code::new("d")], Status::ExcludedByParent);
    assert_eq!(resolved[&Code::new("g")], Status::ExcludedByParent);
    // e sees exclusion via b and inclusion via c: conflict.
    assert_eq!(resolved[&Code::new("e")], Status::Conflict);
    // A conflicted parent keeps its descendants in conflict unless
    // another path settles them; h sees ! via e and (-) via d.
    assert_eq!(resolved[&Code::new("h")], Status::Conflict);
    // i sees ! via e and (+) via f.
    assert_eq!(resolved[&Code::new("i")], Status::Conflict);
    // c's other children never see b.
    assert_eq!(resolved[&Code::new("f")], Status::IncludedByParent);
    assert_eq!(resolved[&Code::new("j")], Status::IncludedByParent);
}

#[test]
fn a_single_inclusion_reaches_the_child_but_not_the_parent() {
    // Hierarchy seeded from {X} where X has parent P and child Y.
    let mut system = openlists_hierarchy::InMemoryCodingSystem::new("test", "Test Codes");
    system.insert_edge("P", "X");
    system.insert_edge("X", "Y");
    let hierarchy = Hierarchy::from_codes(&system, &codes(&["X"])).unwrap();

    let resolved = hierarchy
        .update_node_to_status(&StatusMap::new(), &[Update::new("X", Change::Include)])
        .unwrap();

    assert_eq!(
        resolved,
        status_map(&[
            ("P", Status::Undecided),
            ("X", Status::Included),
            ("Y", Status::IncludedByParent),
        ])
    );
}

#[test]
fn explicit_wins_for_both_codes_in_one_batch() {
    let resolved = full_hierarchy()
        .update_node_to_status(
            &StatusMap::new(),
            &[
                Update::new("b", Change::Include),
                Update::new("e", Change::Exclude),
            ],
        )
        .unwrap();

    assert_eq!(resolved[&Code::new("b")], Status::Included);
    assert_eq!(resolved[&Code::new("e")], Status::Excluded);
    // e's only-through-e descendant is excluded; h also hangs off d.
    assert_eq!(resolved[&Code::new("i")], Status::ExcludedByParent);
    assert_eq!(resolved[&Code::new("h")], Status::Conflict);
}

#[test]
fn disjoint_paths_of_opposite_polarity_conflict() {
    // e has parents b and c; no explicit status of its own.
    let resolved = full_hierarchy()
        .update_node_to_status(
            &StatusMap::new(),
            &[
                Update::new("b", Change::Include),
                Update::new("c", Change::Exclude),
            ],
        )
        .unwrap();

    assert_eq!(resolved[&Code::new("e")], Status::Conflict);
}

#[test]
fn clearing_an_override_falls_back_to_the_parent() {
    let current = status_map(&[("a", Status::Included), ("b", Status::Excluded)]);
    let resolved = full_hierarchy()
        .update_node_to_status(&current, &[Update::new("b", Change::Clear)])
        .unwrap();

    assert_eq!(resolved[&Code::new("b")], Status::IncludedByParent);
}

#[test]
fn output_keys_equal_nodes_for_any_batch() {
    let hierarchy = full_hierarchy();
    let batches: &[&[Update]] = &[
        &[],
        &[Update::new("e", Change::Include)],
        &[
            Update::new("a", Change::Include),
            Update::new("f", Change::Exclude),
        ],
    ];
    for batch in batches {
        let resolved = hierarchy
            .update_node_to_status(&StatusMap::new(), batch)
            .unwrap();
        let resolved_codes: std::collections::BTreeSet<_> =
            resolved.keys().cloned().collect();
        assert_eq!(&resolved_codes, hierarchy.nodes());
    }
}

#[test]
fn explicit_codes_are_never_downgraded() {
    let resolved = full_hierarchy()
        .update_node_to_status(
            &StatusMap::new(),
            &[
                Update::new("a", Change::Exclude),
                Update::new("e", Change::Include),
            ],
        )
        .unwrap();

    // e is surrounded by exclusion but keeps its explicit status.
    assert_eq!(resolved[&Code::new("e")], Status::Included);
    assert_eq!(resolved[&Code::new("b")], Status::ExcludedByParent);
}

#[test]
fn resolution_is_idempotent() {
    let hierarchy = full_hierarchy();
    let first = hierarchy
        .update_node_to_status(
            &StatusMap::new(),
            &[
                Update::new("a", Change::Include),
                Update::new("c", Change::Exclude),
            ],
        )
        .unwrap();
    let second = hierarchy.update_node_to_status(&first, &[]).unwrap();
    let third = hierarchy.update_node_to_status(&second, &[]).unwrap();

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn a_failed_batch_applies_nothing() {
    let hierarchy = full_hierarchy();
    let current = hierarchy
        .update_node_to_status(&StatusMap::new(), &[Update::new("a", Change::Include)])
        .unwrap();

    let err = hierarchy
        .update_node_to_status(
            &current,
            &[
                Update::new("b", Change::Exclude),
                Update::new("nope", Change::Include),
            ],
        )
        .unwrap_err();

    assert_eq!(err, Error::UnknownCode(Code::new("nope")));
    // The caller's map is untouched; re-deriving from it changes nothing.
    let re_derived = hierarchy.update_node_to_status(&current, &[]).unwrap();
    assert_eq!(re_derived, current);
}

#[test]
fn hierarchy_covers_codes_without_rows_of_their_own() {
    // A draft that only knows about d still propagates down to g and h.
    let hierarchy = Hierarchy::from_codes(&coding_system(), &codes(&["d"])).unwrap();
    let resolved = hierarchy
        .update_node_to_status(&StatusMap::new(), &[Update::new("d", Change::Include)])
        .unwrap();

    assert_eq!(resolved[&Code::new("g")], Status::IncludedByParent);
    assert_eq!(resolved[&Code::new("h")], Status::IncludedByParent);
}
