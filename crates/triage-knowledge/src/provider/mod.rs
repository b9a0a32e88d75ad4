//! Knowledge-base providers.

mod memory;
mod yaml;

pub use memory::InMemoryKnowledgeBase;
pub use yaml::YamlKnowledgeBase;

use std::collections::HashSet;

use triage_core::errors::KnowledgeBaseError;
use triage_core::models::KnowledgeEntry;
use triage_observability::events;

/// Required fields must be non-blank.
pub fn validate_entry(entry: &KnowledgeEntry) -> Result<(), KnowledgeBaseError> {
    let missing = [
        ("id", entry.id.as_str()),
        ("title", entry.title.as_str()),
        ("error_example", entry.error_example.as_str()),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty());

    match missing {
        Some((field, _)) => Err(KnowledgeBaseError::InvalidEntry {
            id: entry.id.clone(),
            reason: format!("{field} must not be empty"),
        }),
        None => Ok(()),
    }
}

/// Keep the first entry per id, validate the rest. `origin` names the
/// source of each entry for logs.
pub(crate) fn collect_entries(
    provider: &str,
    candidates: impl IntoIterator<Item = (KnowledgeEntry, String)>,
) -> Vec<KnowledgeEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for (entry, origin) in candidates {
        if let Err(e) = validate_entry(&entry) {
            events::item_skipped("knowledge entry", &origin, &e.to_string());
            continue;
        }
        if !seen.insert(entry.id.clone()) {
            events::item_skipped(
                "knowledge entry",
                &origin,
                &format!("duplicate id {:?} in {provider}, first definition kept", entry.id),
            );
            continue;
        }
        entries.push(entry);
    }
    entries
}
