use triage_core::models::KnowledgeEntry;
use triage_core::traits::KnowledgeBaseProvider;

use super::collect_entries;

/// Knowledge base held in memory, e.g. entries fetched from a database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKnowledgeBase {
    name: String,
    entries: Vec<KnowledgeEntry>,
}

impl InMemoryKnowledgeBase {
    /// Invalid entries are skipped; for duplicate ids the first one wins.
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        Self::named("in-memory", entries)
    }

    pub fn named(name: impl Into<String>, entries: Vec<KnowledgeEntry>) -> Self {
        let name = name.into();
        let candidates = entries.into_iter().enumerate().map(|(i, entry)| {
            let origin = format!("{name}[{i}]");
            (entry, origin)
        });
        let entries = collect_entries(&name, candidates);
        Self { name, entries }
    }
}

impl KnowledgeBaseProvider for InMemoryKnowledgeBase {
    fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    fn name(&self) -> &str {
        &self.name
    }
}
