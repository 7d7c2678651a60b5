//! Status resolution
//!
//! Recomputes the status of every code in a hierarchy from the explicit
//! decisions on record plus a batch of requested changes. This is a full
//! re-derivation rather than an incremental patch: the same explicit
//! decisions always produce the same map, so calling it again with an
//! empty batch is a no-op.

use crate::code::Code;
use crate::error::{Error, Result};
use crate::hierarchy::Hierarchy;
use crate::status::{Polarity, Status, StatusMap, Update};
use std::collections::{BTreeMap, BTreeSet};

impl Hierarchy {
    /// Apply `updates` to the explicit decisions recorded in `current`
    /// and re-derive a status for every code in the hierarchy.
    ///
    /// The batch is atomic: a code named twice fails with
    /// [`Error::ConflictingUpdate`], a code outside the hierarchy with
    /// [`Error::UnknownCode`], and in either case nothing is applied.
    /// The returned map is total over [`nodes`](Hierarchy::nodes).
    pub fn update_node_to_status(
        &self,
        current: &StatusMap,
        updates: &[Update],
    ) -> Result<StatusMap> {
        let mut named = BTreeSet::new();
        for update in updates {
            if !self.nodes().contains(&update.code) {
                return Err(Error::UnknownCode(update.code.clone()));
            }
            if !named.insert(&update.code) {
                return Err(Error::ConflictingUpdate(update.code.clone()));
            }
        }

        // Only explicit decisions survive re-derivation; inherited and
        // conflict entries in the current map are outputs, not inputs.
        let mut explicit: BTreeMap<&Code, Status> = current
            .iter()
            .filter(|(code, status)| status.is_explicit() && self.nodes().contains(*code))
            .map(|(code, status)| (code, *status))
            .collect();
        for update in updates {
            match update.change.explicit_status() {
                Some(status) => {
                    explicit.insert(&update.code, status);
                }
                None => {
                    explicit.remove(&update.code);
                }
            }
        }

        // Single fold over the precomputed topological order: by the time
        // a code is visited every parent already has its final status.
        let mut resolved = StatusMap::new();
        for code in self.topo_order() {
            let status = match explicit.get(code) {
                Some(&status) => status,
                None => self
                    .parents_of(code)
                    .iter()
                    .fold(Polarity::Unset, |polarity, parent| {
                        polarity.merge(resolved[parent].polarity())
                    })
                    .inherited_status(),
            };
            resolved.insert(code.clone(), status);
        }
        Ok(resolved)
    }
}
