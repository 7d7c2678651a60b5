//! Error types for draft operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Hierarchy(#[from] openlists_hierarchy::Error),

    #[error("no search '{0}' on this draft")]
    UnknownSearch(String),

    #[error("a search for '{0}' already exists on this draft")]
    DuplicateSearch(String),
}
