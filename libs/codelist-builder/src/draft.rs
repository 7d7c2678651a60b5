//! Draft code lists
//!
//! A draft owns the StatusMap the hierarchy engine computes against,
//! together with the searches whose results brought codes into the
//! draft. Where the codes came from (term search, legacy import) and how
//! drafts are stored are both outside this crate; the CLI round-trips
//! them through JSON.

use openlists_hierarchy::{Code, Status, StatusMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub slug: String,
    pub coding_system_id: String,
    #[serde(default)]
    pub codes: StatusMap,
    #[serde(default)]
    pub searches: Vec<Search>,
}

/// A recorded search and the codes it surfaced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    pub term: String,
    pub slug: String,
    pub codes: BTreeSet<Code>,
}

impl Draft {
    /// The status on record for `code`, defaulting to undecided.
    pub fn status(&self, code: &Code) -> Status {
        self.codes.get(code).copied().unwrap_or(Status::Undecided)
    }

    pub fn all_codes(&self) -> BTreeSet<Code> {
        self.codes.keys().cloned().collect()
    }

    /// Codes with an explicit inclusion.
    pub fn included_codes(&self) -> BTreeSet<Code> {
        self.codes_with(|status| status == Status::Included)
    }

    /// Codes with an explicit exclusion.
    pub fn excluded_codes(&self) -> BTreeSet<Code> {
        self.codes_with(|status| status == Status::Excluded)
    }

    /// Codes no recorded search accounts for, e.g. seeded at creation.
    pub fn codes_without_search(&self) -> BTreeSet<Code> {
        let searched: BTreeSet<&Code> =
            self.searches.iter().flat_map(|s| s.codes.iter()).collect();
        self.codes
            .keys()
            .filter(|code| !searched.contains(code))
            .cloned()
            .collect()
    }

    pub fn search(&self, slug: &str) -> Option<&Search> {
        self.searches.iter().find(|search| search.slug == slug)
    }

    fn codes_with(&self, predicate: impl Fn(Status) -> bool) -> BTreeSet<Code> {
        self.codes
            .iter()
            .filter(|(_, &status)| predicate(status))
            .map(|(code, _)| code.clone())
            .collect()
    }
}
