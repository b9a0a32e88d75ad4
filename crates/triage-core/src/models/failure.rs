use serde::{Deserialize, Serialize};

/// Identifier of a failed test result, as issued by the failure source.
pub type FailureId = u64;

/// One failed test result, as consumed by clustering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub id: FailureId,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub trace: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl FailureRecord {
    pub fn new(id: FailureId) -> Self {
        Self {
            id,
            message: None,
            trace: None,
            category: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Message if present and not blank.
    pub fn message_text(&self) -> Option<&str> {
        non_blank(self.message.as_deref())
    }

    /// Trace if present and not blank.
    pub fn trace_text(&self) -> Option<&str> {
        non_blank(self.trace.as_deref())
    }

    /// Category if present and not blank.
    pub fn category_text(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
