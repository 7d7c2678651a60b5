//! Draft code lists and the actions a curator performs on them
//!
//! The in-memory side of the builder: a [`Draft`] owns the statuses the
//! hierarchy engine computes, [`actions`] are the transaction-shaped
//! operations (create, search, update statuses) and [`tree`] turns a
//! flat code set into the grouped rows the tree view renders. Real
//! storage, HTTP and term search live elsewhere.

#![forbid(unsafe_code)]

pub mod actions;
pub mod draft;
pub mod error;
pub mod tree;

pub use draft::{Draft, Search};
pub use error::{Error, Result};
pub use tree::{tree_rows, StatusFilter, TreeRow};
