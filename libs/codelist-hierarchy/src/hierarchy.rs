//! The restricted subgraph a code list is computed against
//!
//! A `Hierarchy` is an immutable DAG cut out of a coding system's full
//! ontology: the codes a draft knows about, plus every ancestor (needed
//! for inherited status and ultimate-ancestor grouping) and every
//! descendant (an explicit decision must reach codes that have no row of
//! their own yet). It is rebuilt from the provider for every computation
//! and never mutated in place.

use crate::code::Code;
use crate::coding_system::CodingSystem;
use crate::error::{Error, Result};
use crate::graph;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug)]
pub struct Hierarchy {
    nodes: BTreeSet<Code>,
    parent_map: BTreeMap<Code, BTreeSet<Code>>,
    child_map: BTreeMap<Code, BTreeSet<Code>>,
    // Parents before children; computed once and reused by every
    // resolver call against this hierarchy.
    topo_order: Vec<Code>,
}

impl Hierarchy {
    /// Build the smallest hierarchy covering `codes`, their ancestors and
    /// their descendants.
    ///
    /// Fails with [`Error::UnknownCode`] if any seed code is absent from
    /// the coding system, and with [`Error::MalformedOntology`] if the
    /// supplied adjacency is inconsistent or cyclic.
    pub fn from_codes(coding_system: &dyn CodingSystem, codes: &BTreeSet<Code>) -> Result<Self> {
        // An unknown code reported for anything other than a seed means
        // the provider handed back a neighbour it then disowned.
        let adjacency = |neighbours: Result<BTreeSet<Code>>, code: &Code| match neighbours {
            Err(Error::UnknownCode(_)) if !codes.contains(code) => Err(Error::MalformedOntology(
                format!("provider returned unknown code '{code}'"),
            )),
            other => other,
        };

        let ancestors = graph::transitive_closure(codes, |code| {
            adjacency(coding_system.parents(code), code)
        })?;
        let descendants = graph::transitive_closure(codes, |code| {
            adjacency(coding_system.children(code), code)
        })?;
        let nodes: BTreeSet<Code> = ancestors.union(&descendants).cloned().collect();

        // child_map is derived as the inverse of parent_map so the two
        // cannot disagree.
        let mut parent_map: BTreeMap<Code, BTreeSet<Code>> = BTreeMap::new();
        let mut child_map: BTreeMap<Code, BTreeSet<Code>> = BTreeMap::new();
        for code in &nodes {
            let parents: BTreeSet<Code> = adjacency(coding_system.parents(code), code)?
                .into_iter()
                .filter(|parent| nodes.contains(parent))
                .collect();
            for parent in &parents {
                child_map
                    .entry(parent.clone())
                    .or_default()
                    .insert(code.clone());
            }
            parent_map.insert(code.clone(), parents);
            child_map.entry(code.clone()).or_default();
        }

        let topo_order = graph::topological_order(&nodes, &parent_map, &child_map)?;

        Ok(Self {
            nodes,
            parent_map,
            child_map,
            topo_order,
        })
    }

    pub fn nodes(&self) -> &BTreeSet<Code> {
        &self.nodes
    }

    pub fn parent_map(&self) -> &BTreeMap<Code, BTreeSet<Code>> {
        &self.parent_map
    }

    pub fn child_map(&self) -> &BTreeMap<Code, BTreeSet<Code>> {
        &self.child_map
    }

    pub(crate) fn topo_order(&self) -> &[Code] {
        &self.topo_order
    }

    /// Immediate parents of `code` within the hierarchy.
    pub fn parents_of(&self, code: &Code) -> &BTreeSet<Code> {
        static EMPTY: BTreeSet<Code> = BTreeSet::new();
        self.parent_map.get(code).unwrap_or(&EMPTY)
    }

    /// Immediate children of `code` within the hierarchy.
    pub fn children_of(&self, code: &Code) -> &BTreeSet<Code> {
        static EMPTY: BTreeSet<Code> = BTreeSet::new();
        self.child_map.get(code).unwrap_or(&EMPTY)
    }

    /// All ancestors of `code` within the hierarchy, excluding `code`.
    pub fn ancestors(&self, code: &Code) -> BTreeSet<Code> {
        self.reachable(code, &self.parent_map)
    }

    /// All descendants of `code` within the hierarchy, excluding `code`.
    pub fn descendants(&self, code: &Code) -> BTreeSet<Code> {
        self.reachable(code, &self.child_map)
    }

    fn reachable(&self, code: &Code, map: &BTreeMap<Code, BTreeSet<Code>>) -> BTreeSet<Code> {
        let mut reached = BTreeSet::new();
        let mut frontier: Vec<&Code> = map.get(code).into_iter().flatten().collect();
        while let Some(next) = frontier.pop() {
            if reached.insert(next.clone()) {
                frontier.extend(map.get(next).into_iter().flatten());
            }
        }
        reached
    }

    /// The members of `codes` with no ancestor also in `codes`: the
    /// minimal forest of roots a flat list is grouped under for display.
    ///
    /// Ancestor walks go through the whole hierarchy, so a code whose only
    /// in-set ancestor is reached via codes outside the set is still
    /// excluded. Reachability is memoized per call.
    pub fn filter_to_ultimate_ancestors(&self, codes: &BTreeSet<Code>) -> BTreeSet<Code> {
        let mut cache: BTreeMap<Code, bool> = BTreeMap::new();
        codes
            .iter()
            .filter(|code| !self.has_ancestor_in(code, codes, &mut cache))
            .cloned()
            .collect()
    }

    fn has_ancestor_in(
        &self,
        code: &Code,
        codes: &BTreeSet<Code>,
        cache: &mut BTreeMap<Code, bool>,
    ) -> bool {
        if let Some(&known) = cache.get(code) {
            return known;
        }
        let result = self.parents_of(code).iter().any(|parent| {
            codes.contains(parent) || self.has_ancestor_in(parent, codes, cache)
        });
        cache.insert(code.clone(), result);
        result
    }
}
