//! Actions on a draft
//!
//! Each action leaves the draft unchanged on error and logs on success,
//! so a caller can treat them as the transaction boundary.

use crate::draft::{Draft, Search};
use crate::error::{Error, Result};
use heck::ToKebabCase;
use openlists_hierarchy::{Code, CodingSystem, Hierarchy, Status, Update};
use std::collections::BTreeSet;
use tracing::info;

pub fn create_draft(name: &str, coding_system_id: &str) -> Draft {
    let draft = Draft {
        name: name.to_string(),
        slug: name.to_kebab_case(),
        coding_system_id: coding_system_id.to_string(),
        codes: Default::default(),
        searches: Vec::new(),
    };
    info!(draft = %draft.slug, "created draft");
    draft
}

/// Create a draft pre-seeded with codes, all undecided.
pub fn create_draft_with_codes(
    name: &str,
    coding_system_id: &str,
    codes: BTreeSet<Code>,
) -> Draft {
    let mut draft = create_draft(name, coding_system_id);
    let count = codes.len();
    for code in codes {
        draft.codes.insert(code, Status::Undecided);
    }
    info!(draft = %draft.slug, codes = count, "seeded draft codes");
    draft
}

/// Record a search and make sure every result code has a row on the
/// draft. Codes already present keep their status.
pub fn create_search<'a>(
    draft: &'a mut Draft,
    term: &str,
    codes: BTreeSet<Code>,
) -> Result<&'a Search> {
    let slug = term.to_kebab_case();
    if draft.search(&slug).is_some() {
        return Err(Error::DuplicateSearch(term.to_string()));
    }

    for code in &codes {
        draft
            .codes
            .entry(code.clone())
            .or_insert(Status::Undecided);
    }
    draft.searches.push(Search {
        term: term.to_string(),
        slug,
        codes,
    });

    let search = draft.searches.last().expect("just pushed");
    info!(draft = %draft.slug, search = %search.slug, codes = search.codes.len(), "created search");
    Ok(search)
}

/// Remove a search, dropping any code that only this search brought in.
/// A dropped row takes its status with it, explicit or not.
pub fn delete_search(draft: &mut Draft, slug: &str) -> Result<()> {
    let position = draft
        .searches
        .iter()
        .position(|search| search.slug == slug)
        .ok_or_else(|| Error::UnknownSearch(slug.to_string()))?;
    let removed = draft.searches.remove(position);

    let still_searched: BTreeSet<&Code> = draft
        .searches
        .iter()
        .flat_map(|search| search.codes.iter())
        .collect();
    for code in &removed.codes {
        if !still_searched.contains(code) {
            draft.codes.remove(code);
        }
    }

    info!(draft = %draft.slug, search = %removed.slug, "deleted search");
    Ok(())
}

/// Apply a batch of status updates: build a fresh hierarchy over the
/// draft's codes, re-derive every status and persist the results for the
/// codes the draft tracks.
pub fn update_code_statuses(
    draft: &mut Draft,
    coding_system: &dyn CodingSystem,
    updates: &[Update],
) -> Result<()> {
    let hierarchy = Hierarchy::from_codes(coding_system, &draft.all_codes())?;
    let resolved = hierarchy.update_node_to_status(&draft.codes, updates)?;

    for (code, status) in resolved {
        if let Some(entry) = draft.codes.get_mut(&code) {
            *entry = status;
        }
    }

    info!(draft = %draft.slug, updates = updates.len(), "updated code statuses");
    Ok(())
}
