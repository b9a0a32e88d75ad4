//! Failure documents: the normalized text each failure is compared by.

use triage_core::models::FailureRecord;
use triage_text::normalize;

/// Message, trace and category joined by newlines (blank fields skipped),
/// then normalized. Empty when the record carries no text.
pub fn build_document(record: &FailureRecord) -> String {
    let parts: Vec<&str> = [
        record.message_text(),
        record.trace_text(),
        record.category_text(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if parts.is_empty() {
        return String::new();
    }
    normalize(&parts.join("\n"))
}

/// True when the document has nothing to compare.
pub fn is_blank(document: &str) -> bool {
    document.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_present_fields_in_order() {
        let record = FailureRecord::new(1)
            .with_message("boom")
            .with_trace("at a.B.c(B.java:10)")
            .with_category("env");
        assert_eq!(build_document(&record), "boom\nat a.B.c(B.java:10)\nenv");
    }

    #[test]
    fn skips_absent_and_blank_fields() {
        let record = FailureRecord::new(1).with_message("  ").with_category("data");
        assert_eq!(build_document(&record), "data");
    }

    #[test]
    fn normalizes_volatile_values() {
        let record = FailureRecord::new(1).with_message("order 123456 at 10.0.0.1");
        assert_eq!(build_document(&record), "order <NUM> at <IP>");
    }

    #[test]
    fn no_text_is_blank() {
        let doc = build_document(&FailureRecord::new(7));
        assert!(is_blank(&doc));
    }
}
