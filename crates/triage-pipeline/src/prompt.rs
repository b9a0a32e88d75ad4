//! Explainer prompt for one failure cluster.

use triage_core::models::{FailureCluster, MatchResult};

pub const MAX_MESSAGE_CHARS: usize = 2000;
pub const MAX_TRACE_CHARS: usize = 3000;
pub const MAX_LOG_CHARS: usize = 2000;

const TRUNCATION_MARK: &str = "...[truncated]";

/// Build the prompt: cluster summary, error text (each part bounded), the
/// top `max_matches` knowledge-base matches and the questions to answer.
pub fn build_cluster_prompt(
    cluster: &FailureCluster,
    matches: &[MatchResult],
    log_snippet: Option<&str>,
    max_matches: usize,
) -> String {
    let mut parts: Vec<String> = vec![
        "Analyze this cluster of automated test failures.".to_string(),
        String::new(),
        format!("Cluster: {}", cluster.label),
        format!("Failed tests with this error: {}", cluster.member_count()),
    ];

    let sections = [
        ("Error message:", cluster.example_message.as_deref(), MAX_MESSAGE_CHARS),
        ("Stack trace (excerpt):", cluster.example_trace_snippet.as_deref(), MAX_TRACE_CHARS),
        ("Application log (excerpt):", log_snippet, MAX_LOG_CHARS),
    ];
    for (heading, text, limit) in sections {
        if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
            parts.push(String::new());
            parts.push(heading.to_string());
            parts.push(truncate_chars(text, limit));
        }
    }

    if !matches.is_empty() && max_matches > 0 {
        parts.push(String::new());
        parts.push("Known issues from the knowledge base:".to_string());
        for m in matches.iter().take(max_matches) {
            parts.push(format!("  [{:.2}] {}", m.score, m.entry.title));
            if !m.entry.description.is_empty() {
                parts.push(format!("    Description: {}", m.entry.description));
            }
            parts.push(format!("    Root cause: {}", m.entry.category));
            if !m.entry.resolution_steps.is_empty() {
                parts.push("    Resolution steps:".to_string());
                parts.extend(m.entry.resolution_steps.iter().map(|s| format!("      - {s}")));
            }
        }
    }

    parts.push(String::new());
    parts.push(
        "Using the error and the knowledge base (if any):\n\
         1. Name the likely root cause (test, service, env or data).\n\
         2. Give a concrete fix.\n\
         3. Rate the severity (critical/high/medium/low)."
            .to_string(),
    );
    parts.join("\n")
}

/// True when a cluster carries any text an explainer could work with.
pub fn has_error_text(cluster: &FailureCluster, log_snippet: Option<&str>) -> bool {
    [
        cluster.example_message.as_deref(),
        cluster.example_trace_snippet.as_deref(),
        log_snippet,
    ]
    .into_iter()
    .flatten()
    .any(|t| !t.trim().is_empty())
}

/// First `limit` characters, marked when cut.
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => format!("{}{TRUNCATION_MARK}", &text[..end]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::models::{ClusterSignature, KnowledgeEntry, MatchTier, RootCauseCategory};

    fn cluster(message: Option<&str>, trace: Option<&str>) -> FailureCluster {
        FailureCluster {
            cluster_id: "abc".to_string(),
            label: "Timeout".to_string(),
            signature: ClusterSignature::default(),
            member_ids: vec![1, 2],
            representative_id: 1,
            example_message: message.map(str::to_string),
            example_trace_snippet: trace.map(str::to_string),
        }
    }

    fn kb_match(title: &str, score: f64) -> MatchResult {
        MatchResult {
            entry: KnowledgeEntry {
                id: title.to_lowercase(),
                title: title.to_string(),
                description: "desc".to_string(),
                error_example: "x".to_string(),
                category: RootCauseCategory::Env,
                resolution_steps: vec!["restart".to_string()],
            },
            score,
            tier: MatchTier::ExactSubstring,
            matched_on: vec![],
        }
    }

    #[test]
    fn prompt_contains_sections_and_top_matches_only() {
        let matches = vec![kb_match("A", 1.0), kb_match("B", 0.9), kb_match("C", 0.8), kb_match("D", 0.7)];
        let prompt = build_cluster_prompt(&cluster(Some("boom"), Some("at x")), &matches, Some("log"), 3);
        assert!(prompt.contains("Cluster: Timeout"));
        assert!(prompt.contains("Failed tests with this error: 2"));
        assert!(prompt.contains("Error message:\nboom"));
        assert!(prompt.contains("Stack trace (excerpt):\nat x"));
        assert!(prompt.contains("Application log (excerpt):\nlog"));
        assert!(prompt.contains("[0.80] C"));
        assert!(!prompt.contains("[0.70] D"));
        assert!(prompt.contains("Root cause: env"));
        assert!(prompt.contains("      - restart"));
    }

    #[test]
    fn long_message_is_truncated() {
        let long = "é".repeat(MAX_MESSAGE_CHARS + 10);
        let prompt = build_cluster_prompt(&cluster(Some(&long), None), &[], None, 3);
        let expected = format!("{}{TRUNCATION_MARK}", "é".repeat(MAX_MESSAGE_CHARS));
        assert!(prompt.contains(&expected));
        assert!(!prompt.contains(&"é".repeat(MAX_MESSAGE_CHARS + 1)));
    }

    #[test]
    fn error_text_detection() {
        assert!(!has_error_text(&cluster(None, Some("  ")), None));
        assert!(has_error_text(&cluster(None, None), Some("ERROR x")));
    }
}
