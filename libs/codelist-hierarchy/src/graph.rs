//! Shared graph utilities: fallible closure traversal and topological
//! ordering over code adjacency maps.

use crate::code::Code;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// All codes reachable from `seeds` (inclusive) by repeatedly applying
/// `step`.
///
/// The visited set makes this terminate even if the supplied adjacency
/// contains a cycle; cycle detection proper happens in
/// [`topological_order`].
pub(crate) fn transitive_closure<F>(seeds: &BTreeSet<Code>, mut step: F) -> Result<BTreeSet<Code>>
where
    F: FnMut(&Code) -> Result<BTreeSet<Code>>,
{
    let mut seen = seeds.clone();
    let mut frontier: VecDeque<Code> = seeds.iter().cloned().collect();

    while let Some(code) = frontier.pop_front() {
        for next in step(&code)? {
            if seen.insert(next.clone()) {
                frontier.push_back(next);
            }
        }
    }

    Ok(seen)
}

/// Kahn's algorithm over the restricted subgraph: every code appears after
/// all of its parents.
///
/// `parent_map` and `child_map` must be total over `nodes` and mutual
/// inverses; a cycle (or an edge endpoint missing from `nodes`) is
/// reported as [`Error::MalformedOntology`].
pub(crate) fn topological_order(
    nodes: &BTreeSet<Code>,
    parent_map: &BTreeMap<Code, BTreeSet<Code>>,
    child_map: &BTreeMap<Code, BTreeSet<Code>>,
) -> Result<Vec<Code>> {
    let mut remaining_parents: BTreeMap<&Code, usize> = nodes
        .iter()
        .map(|code| (code, parent_map.get(code).map_or(0, BTreeSet::len)))
        .collect();

    let mut ready: VecDeque<&Code> = remaining_parents
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(code, _)| *code)
        .collect();

    let mut order = Vec::with_capacity(nodes.len());
    while let Some(code) = ready.pop_front() {
        order.push(code.clone());
        for child in child_map.get(code).into_iter().flatten() {
            let count = remaining_parents.get_mut(child).ok_or_else(|| {
                Error::MalformedOntology(format!("edge to '{child}' outside the node set"))
            })?;
            *count -= 1;
            if *count == 0 {
                ready.push_back(child);
            }
        }
    }

    if order.len() != nodes.len() {
        return Err(Error::MalformedOntology(
            "cycle detected in parent/child adjacency".to_string(),
        ));
    }
    Ok(order)
}
