//! Tree presentation of a draft
//!
//! Groups a flat set of displayed codes into the minimal forest of
//! ultimate ancestors and expands each root into indented rows, the shape
//! the builder's tree view renders.

use openlists_hierarchy::{Code, CodingSystem, Hierarchy, Status, StatusMap};
use std::collections::BTreeSet;
use std::str::FromStr;

/// The status facets a curator can narrow the view to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    Included,
    Excluded,
    Unresolved,
    InConflict,
}

impl StatusFilter {
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::Included => status.is_included(),
            StatusFilter::Excluded => status.is_excluded(),
            StatusFilter::Unresolved => status == Status::Undecided,
            StatusFilter::InConflict => status == Status::Conflict,
        }
    }

    /// Restrict `codes` to those whose status matches.
    pub fn apply(self, codes: &BTreeSet<Code>, statuses: &StatusMap) -> BTreeSet<Code> {
        codes
            .iter()
            .filter(|code| {
                let status = statuses.get(code).copied().unwrap_or(Status::Undecided);
                self.matches(status)
            })
            .cloned()
            .collect()
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "included" => Ok(StatusFilter::Included),
            "excluded" => Ok(StatusFilter::Excluded),
            "unresolved" => Ok(StatusFilter::Unresolved),
            "in-conflict" => Ok(StatusFilter::InConflict),
            _ => Err(format!(
                "unknown filter '{s}' (expected included, excluded, unresolved or in-conflict)"
            )),
        }
    }
}

/// One rendered line of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    pub code: Code,
    pub term: String,
    pub status: Status,
    pub depth: usize,
}

/// Expand `displayed` into tree rows: ultimate ancestors first, each
/// followed by its full subtree, everything sorted by term. A code with
/// several parents in the subtree appears once under each of them, as the
/// original tree view shows it.
pub fn tree_rows(
    hierarchy: &Hierarchy,
    coding_system: &dyn CodingSystem,
    displayed: &BTreeSet<Code>,
    statuses: &StatusMap,
) -> Vec<TreeRow> {
    let terms = coding_system.code_to_term(hierarchy.nodes());
    let term_of = |code: &Code| terms.get(code).cloned().unwrap_or_default();
    let by_term = |a: &Code, b: &Code| term_of(a).cmp(&term_of(b)).then_with(|| a.cmp(b));

    let mut roots: Vec<Code> = hierarchy
        .filter_to_ultimate_ancestors(displayed)
        .into_iter()
        .collect();
    roots.sort_by(by_term);

    let mut rows = Vec::new();
    for root in roots {
        let mut stack = vec![(root, 0)];
        while let Some((code, depth)) = stack.pop() {
            let status = statuses.get(&code).copied().unwrap_or(Status::Undecided);
            let mut children: Vec<Code> =
                hierarchy.children_of(&code).iter().cloned().collect();
            children.sort_by(by_term);
            // Reversed so the stack pops children in term order.
            for child in children.into_iter().rev() {
                stack.push((child, depth + 1));
            }
            rows.push(TreeRow {
                term: term_of(&code),
                code,
                status,
                depth,
            });
        }
    }
    rows
}
