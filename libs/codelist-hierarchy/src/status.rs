//! The status taxonomy for codes in a draft code list
//!
//! Every code known to a draft carries one of six statuses. `+` and `-`
//! record an explicit decision by a curator; `(+)` and `(-)` are decisions
//! inherited from an ancestor; `!` marks a code reached by both polarities
//! with no explicit override; `?` means nobody has decided yet.

use crate::code::Code;
use crate::error::Error;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Code -> Status over the codes known to a draft.
pub type StatusMap = BTreeMap<Code, Status>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// `?` — no explicit or inherited decision
    Undecided,
    /// `+` — explicitly included
    Included,
    /// `-` — explicitly excluded
    Excluded,
    /// `(+)` — included by inheritance from an ancestor
    IncludedByParent,
    /// `(-)` — excluded by inheritance from an ancestor
    ExcludedByParent,
    /// `!` — reached by both polarities with no explicit override
    Conflict,
}

impl Status {
    pub fn symbol(self) -> &'static str {
        match self {
            Status::Undecided => "?",
            Status::Included => "+",
            Status::Excluded => "-",
            Status::IncludedByParent => "(+)",
            Status::ExcludedByParent => "(-)",
            Status::Conflict => "!",
        }
    }

    /// Whether this status was set directly by a curator (`+` or `-`).
    pub fn is_explicit(self) -> bool {
        matches!(self, Status::Included | Status::Excluded)
    }

    /// Whether this status includes the code in the list (`+` or `(+)`).
    pub fn is_included(self) -> bool {
        matches!(self, Status::Included | Status::IncludedByParent)
    }

    /// Whether this status excludes the code from the list (`-` or `(-)`).
    pub fn is_excluded(self) -> bool {
        matches!(self, Status::Excluded | Status::ExcludedByParent)
    }

    /// The signal this status sends to descendants.
    pub(crate) fn polarity(self) -> Polarity {
        match self {
            Status::Undecided => Polarity::Unset,
            Status::Included | Status::IncludedByParent => Polarity::Include,
            Status::Excluded | Status::ExcludedByParent => Polarity::Exclude,
            Status::Conflict => Polarity::Conflict,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "?" => Ok(Status::Undecided),
            "+" => Ok(Status::Included),
            "-" => Ok(Status::Excluded),
            "(+)" => Ok(Status::IncludedByParent),
            "(-)" => Ok(Status::ExcludedByParent),
            "!" => Ok(Status::Conflict),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SymbolVisitor;

        impl Visitor<'_> for SymbolVisitor {
            type Value = Status;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a status symbol: ?, +, -, (+), (-) or !")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Status, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(SymbolVisitor)
    }
}

/// The inclusion/exclusion signal a code receives from its ancestors.
///
/// `merge` is associative and commutative with `Unset` as identity and
/// `Conflict` absorbing, so folding over parents is order-independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Polarity {
    Unset,
    Include,
    Exclude,
    Conflict,
}

impl Polarity {
    pub(crate) fn merge(self, other: Polarity) -> Polarity {
        use Polarity::*;
        match (self, other) {
            (Unset, p) | (p, Unset) => p,
            (Conflict, _) | (_, Conflict) => Conflict,
            (Include, Include) => Include,
            (Exclude, Exclude) => Exclude,
            (Include, Exclude) | (Exclude, Include) => Conflict,
        }
    }

    /// The status a code without its own explicit decision ends up with.
    pub(crate) fn inherited_status(self) -> Status {
        match self {
            Polarity::Unset => Status::Undecided,
            Polarity::Include => Status::IncludedByParent,
            Polarity::Exclude => Status::ExcludedByParent,
            Polarity::Conflict => Status::Conflict,
        }
    }
}

/// A requested explicit change to one code's status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    /// `+` — include the code and its descendants
    Include,
    /// `-` — exclude the code and its descendants
    Exclude,
    /// `?` — clear the explicit decision
    Clear,
}

impl Change {
    pub fn symbol(self) -> &'static str {
        match self {
            Change::Include => "+",
            Change::Exclude => "-",
            Change::Clear => "?",
        }
    }

    /// The explicit status this change pins, if any.
    pub(crate) fn explicit_status(self) -> Option<Status> {
        match self {
            Change::Include => Some(Status::Included),
            Change::Exclude => Some(Status::Excluded),
            Change::Clear => None,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Change {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "+" => Ok(Change::Include),
            "-" => Ok(Change::Exclude),
            "?" => Ok(Change::Clear),
            _ => Err(Error::InvalidUpdate(s.to_string())),
        }
    }
}

impl Serialize for Change {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Change {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SymbolVisitor;

        impl Visitor<'_> for SymbolVisitor {
            type Value = Change;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an update symbol: +, - or ?")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Change, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(SymbolVisitor)
    }
}

/// One entry of an update batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub code: Code,
    pub change: Change,
}

impl Update {
    pub fn new(code: impl Into<Code>, change: Change) -> Self {
        Self {
            code: code.into(),
            change,
        }
    }
}
