use crate::models::KnowledgeEntry;

/// Read-only source of knowledge entries.
pub trait KnowledgeBaseProvider: Send + Sync {
    fn entries(&self) -> &[KnowledgeEntry];

    fn entry_by_id(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.entries().iter().find(|e| e.id == id)
    }

    /// Human-readable provider name for logs.
    fn name(&self) -> &str;

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl<T: KnowledgeBaseProvider + ?Sized> KnowledgeBaseProvider for std::sync::Arc<T> {
    fn entries(&self) -> &[KnowledgeEntry] {
        (**self).entries()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
