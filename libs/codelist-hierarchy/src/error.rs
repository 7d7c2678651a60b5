//! Error types for hierarchy construction and status resolution

use crate::code::Code;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown code '{0}'")]
    UnknownCode(Code),

    #[error("conflicting updates for code '{0}'")]
    ConflictingUpdate(Code),

    #[error("malformed ontology: {0}")]
    MalformedOntology(String),

    #[error("invalid status symbol '{0}'")]
    InvalidStatus(String),

    #[error("invalid update symbol '{0}' (expected '+', '-' or '?')")]
    InvalidUpdate(String),
}
