//! `openlists` — build clinical code lists from the command line
//!
//! Drafts live in JSON files; the ontology is loaded per invocation from
//! an ontology definition file (see [`ontology`]).

mod draft_file;
mod ontology;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use openlists_builder::{actions, tree_rows, StatusFilter};
use openlists_hierarchy::{Change, Code, Hierarchy, Update};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "openlists", about = "Build clinical code lists", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new draft file
    New {
        /// Draft name, e.g. "Tennis Elbow"
        name: String,
        /// Coding system identifier, e.g. snomedct
        #[arg(long)]
        coding_system: String,
        /// Where to write the draft
        #[arg(long)]
        draft: PathBuf,
    },
    /// Attach a search and its result codes to a draft
    AddSearch {
        #[arg(long)]
        draft: PathBuf,
        /// The term that was searched for
        #[arg(long)]
        term: String,
        /// The codes the search surfaced
        codes: Vec<String>,
    },
    /// Apply status updates, e.g. `128133004=+ 239964003=-`
    Update {
        #[arg(long)]
        ontology: PathBuf,
        #[arg(long)]
        draft: PathBuf,
        /// CODE=+ to include, CODE=- to exclude, CODE=? to clear
        updates: Vec<String>,
    },
    /// Print the draft's codes as a grouped tree
    Tree {
        #[arg(long)]
        ontology: PathBuf,
        #[arg(long)]
        draft: PathBuf,
        /// Narrow to one facet: included, excluded, unresolved, in-conflict
        #[arg(long)]
        filter: Option<StatusFilter>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::New {
            name,
            coding_system,
            draft,
        } => {
            let created = actions::create_draft(&name, &coding_system);
            draft_file::save(&draft, &created)?;
            println!("Created draft '{}' at {}", created.slug, draft.display());
        }
        Command::AddSearch { draft, term, codes } => {
            let mut loaded = draft_file::load(&draft)?;
            let codes: BTreeSet<Code> = codes.into_iter().map(Code::from).collect();
            let search = actions::create_search(&mut loaded, &term, codes)?;
            println!("Search '{}' added {} codes", search.slug, search.codes.len());
            draft_file::save(&draft, &loaded)?;
        }
        Command::Update {
            ontology,
            draft,
            updates,
        } => {
            let system = ontology::load(&ontology)?;
            let mut loaded = draft_file::load(&draft)?;
            let updates = parse_updates(&updates)?;
            actions::update_code_statuses(&mut loaded, &system, &updates)?;
            draft_file::save(&draft, &loaded)?;
            for (code, status) in &loaded.codes {
                println!("{:>4}  {code}", status.symbol());
            }
        }
        Command::Tree {
            ontology,
            draft,
            filter,
        } => {
            let system = ontology::load(&ontology)?;
            let loaded = draft_file::load(&draft)?;
            let all_codes = loaded.all_codes();
            if all_codes.is_empty() {
                bail!("draft has no codes; add a search first");
            }
            let hierarchy = Hierarchy::from_codes(&system, &all_codes)?;
            let displayed = match filter {
                Some(filter) => filter.apply(&all_codes, &loaded.codes),
                None => all_codes,
            };
            for row in tree_rows(&hierarchy, &system, &displayed, &loaded.codes) {
                println!(
                    "{:>4}  {}{} ({})",
                    row.status.symbol(),
                    "  ".repeat(row.depth),
                    row.term,
                    row.code
                );
            }
        }
    }
    Ok(())
}

fn parse_updates(raw: &[String]) -> anyhow::Result<Vec<Update>> {
    if raw.is_empty() {
        bail!("no updates given; expected CODE=+, CODE=- or CODE=?");
    }
    raw.iter()
        .map(|entry| {
            let (code, symbol) = entry
                .split_once('=')
                .with_context(|| format!("malformed update '{entry}', expected CODE=symbol"))?;
            let change: Change = symbol
                .parse()
                .with_context(|| format!("malformed update '{entry}'"))?;
            Ok(Update::new(code, change))
        })
        .collect()
}
