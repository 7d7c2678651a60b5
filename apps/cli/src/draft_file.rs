//! Draft JSON round-tripping

use anyhow::Context;
use openlists_builder::Draft;
use std::fs;
use std::path::Path;

pub fn load(path: &Path) -> anyhow::Result<Draft> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading draft file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing draft file {}", path.display()))
}

pub fn save(path: &Path, draft: &Draft) -> anyhow::Result<()> {
    let raw = serde_json::to_string_pretty(draft).context("serializing draft")?;
    fs::write(path, raw).with_context(|| format!("writing draft file {}", path.display()))
}
