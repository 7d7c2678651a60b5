//! Code list hierarchies and status propagation
//!
//! Clinical ontologies are DAGs: a concept can have several parents and
//! many descendants, so a curator's decision to include or exclude one
//! concept has to propagate through the graph. This crate builds the
//! minimal working subgraph for the codes a draft list knows about
//! ([`Hierarchy`]), answers the grouping queries a tree view needs, and
//! re-derives every code's effective [`Status`] whenever explicit
//! decisions change. Decisions reaching a code from ancestors of opposite
//! polarity flag it as in conflict rather than being silently resolved.
//!
//! The ontology itself is consumed through the [`CodingSystem`] trait;
//! [`InMemoryCodingSystem`] backs tests and file-loaded ontologies.

#![forbid(unsafe_code)]

pub mod code;
pub mod coding_system;
pub mod error;
mod graph;
pub mod hierarchy;
mod resolver;
pub mod status;

pub use code::Code;
pub use coding_system::{CodingSystem, InMemoryCodingSystem, UNKNOWN_TERM};
pub use error::{Error, Result};
pub use hierarchy::Hierarchy;
pub use status::{Change, Status, StatusMap, Update};
