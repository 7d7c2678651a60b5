//! The ontology provider boundary
//!
//! A coding system supplies the adjacency information a `Hierarchy` is
//! built from, and maps codes to display terms. Real providers sit on top
//! of a terminology release (SNOMED CT, CTV3, BNF, ...); the in-memory
//! implementation here backs tests and ontologies loaded from files.

use crate::code::Code;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Placeholder term for codes the provider cannot name.
pub const UNKNOWN_TERM: &str = "[Unknown]";

pub trait CodingSystem {
    /// Short identifier, e.g. `snomedct`.
    fn id(&self) -> &str;

    /// Human-readable name, e.g. `SNOMED CT`.
    fn name(&self) -> &str;

    /// Immediate parents of `code`.
    ///
    /// Must be total and deterministic for any code the system knows, and
    /// fail with [`Error::UnknownCode`] for any it does not.
    fn parents(&self, code: &Code) -> Result<BTreeSet<Code>>;

    /// Immediate children of `code`. Same contract as [`parents`].
    ///
    /// [`parents`]: CodingSystem::parents
    fn children(&self, code: &Code) -> Result<BTreeSet<Code>>;

    /// Display term for `code`, if the system knows one.
    fn term(&self, code: &Code) -> Option<String>;

    /// Terms for a batch of codes, with [`UNKNOWN_TERM`] standing in for
    /// any the system cannot name.
    fn code_to_term(&self, codes: &BTreeSet<Code>) -> BTreeMap<Code, String> {
        codes
            .iter()
            .map(|code| {
                let term = self.term(code).unwrap_or_else(|| UNKNOWN_TERM.to_string());
                (code.clone(), term)
            })
            .collect()
    }
}

/// A coding system held entirely in memory.
///
/// Built from concept/term entries and (parent, child) edge pairs. The
/// graph is not validated here; a cycle in the supplied edges surfaces as
/// [`Error::MalformedOntology`] when a `Hierarchy` is constructed over it.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCodingSystem {
    id: String,
    name: String,
    terms: BTreeMap<Code, String>,
    parent_map: BTreeMap<Code, BTreeSet<Code>>,
    child_map: BTreeMap<Code, BTreeSet<Code>>,
}

impl InMemoryCodingSystem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Register a concept with its display term.
    pub fn insert_concept(&mut self, code: impl Into<Code>, term: impl Into<String>) {
        self.terms.insert(code.into(), term.into());
    }

    /// Register a parent -> child edge. Both endpoints become known codes.
    pub fn insert_edge(&mut self, parent: impl Into<Code>, child: impl Into<Code>) {
        let parent = parent.into();
        let child = child.into();
        self.parent_map
            .entry(child.clone())
            .or_default()
            .insert(parent.clone());
        self.child_map.entry(parent).or_default().insert(child);
    }

    pub fn contains(&self, code: &Code) -> bool {
        self.terms.contains_key(code)
            || self.parent_map.contains_key(code)
            || self.child_map.contains_key(code)
    }

    fn known(&self, code: &Code) -> Result<()> {
        if self.contains(code) {
            Ok(())
        } else {
            Err(Error::UnknownCode(code.clone()))
        }
    }
}

impl CodingSystem for InMemoryCodingSystem {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn parents(&self, code: &Code) -> Result<BTreeSet<Code>> {
        self.known(code)?;
        Ok(self.parent_map.get(code).cloned().unwrap_or_default())
    }

    fn children(&self, code: &Code) -> Result<BTreeSet<Code>> {
        self.known(code)?;
        Ok(self.child_map.get(code).cloned().unwrap_or_default())
    }

    fn term(&self, code: &Code) -> Option<String> {
        self.terms.get(code).cloned()
    }
}
