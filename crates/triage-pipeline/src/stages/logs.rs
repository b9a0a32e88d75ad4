use std::collections::BTreeMap;

use tracing::debug;

use triage_core::models::{FailureId, TriageReport};
use triage_core::traits::FailureSource;
use triage_observability::events;

use crate::log_extraction::extract_error_blocks;

/// ERROR blocks from the attachments of every failed result. Results whose
/// attachments cannot be read are skipped; results without blocks are absent.
pub fn collect_log_snippets(
    source: &dyn FailureSource,
    report: &TriageReport,
) -> BTreeMap<FailureId, String> {
    let mut snippets = BTreeMap::new();
    let mut failed = 0usize;
    for test in &report.failed_tests {
        let texts = match source.attachment_texts(test.id) {
            Ok(texts) => texts,
            Err(e) => {
                failed += 1;
                events::item_skipped("attachments", &test.id.to_string(), &e.to_string());
                continue;
            }
        };
        let blocks: Vec<String> = texts
            .iter()
            .map(String::as_str)
            .map(extract_error_blocks)
            .filter(|b| !b.is_empty())
            .collect();
        if !blocks.is_empty() {
            debug!(failure = test.id, blocks = blocks.len(), "log ERROR blocks extracted");
            snippets.insert(test.id, blocks.join("\n\n"));
        }
    }
    events::stage_completed("logs", report.failed_tests.len(), failed);
    snippets
}
