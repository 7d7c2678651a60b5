//! Ontology files
//!
//! A coding system definition the CLI can load:
//!
//! ```json
//! {
//!   "id": "snomedct",
//!   "name": "SNOMED CT",
//!   "concepts": [
//!     {"code": "128133004", "term": "Disorder of elbow", "parents": ["116309007"]}
//!   ]
//! }
//! ```

use anyhow::Context;
use openlists_hierarchy::InMemoryCodingSystem;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct OntologyFile {
    id: String,
    name: String,
    concepts: Vec<Concept>,
}

#[derive(Debug, Deserialize)]
struct Concept {
    code: String,
    term: String,
    #[serde(default)]
    parents: Vec<String>,
}

pub fn load(path: &Path) -> anyhow::Result<InMemoryCodingSystem> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading ontology file {}", path.display()))?;
    let file: OntologyFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing ontology file {}", path.display()))?;

    let mut system = InMemoryCodingSystem::new(file.id, file.name);
    for concept in file.concepts {
        system.insert_concept(concept.code.as_str(), concept.term);
        for parent in concept.parents {
            system.insert_edge(parent, concept.code.as_str());
        }
    }
    Ok(system)
}
