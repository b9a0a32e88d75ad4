//! Knowledge-base recommendation comments.

use triage_core::models::MatchResult;

pub const COMMENT_HEADER: &str = "[triage] Knowledge-base recommendation";

/// Comment text for a cluster's matches; empty when there are none.
pub fn format_kb_comment(matches: &[MatchResult]) -> String {
    if matches.is_empty() {
        return String::new();
    }
    let rule = "=".repeat(40);
    let mut parts: Vec<String> = vec![COMMENT_HEADER.to_string(), rule, String::new()];

    for (i, m) in matches.iter().enumerate() {
        if i > 0 {
            parts.push(String::new());
            parts.push("-".repeat(40));
            parts.push(String::new());
        }
        parts.push(format!("KB: {} (score: {:.2})", m.entry.title, m.score));
        parts.push(format!("Root cause: {}", m.entry.category));
        if !m.entry.resolution_steps.is_empty() {
            parts.push(String::new());
            parts.push("Resolution steps:".to_string());
            parts.extend(
                m.entry
                    .resolution_steps
                    .iter()
                    .enumerate()
                    .map(|(n, step)| format!("  {}. {step}", n + 1)),
            );
        }
        if !m.matched_on.is_empty() {
            parts.push(String::new());
            parts.push(format!("Matched on: {}", m.matched_on.join(", ")));
        }
    }
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::models::{KnowledgeEntry, MatchTier, RootCauseCategory};

    fn kb_match(title: &str, steps: &[&str]) -> MatchResult {
        MatchResult {
            entry: KnowledgeEntry {
                id: title.to_lowercase(),
                title: title.to_string(),
                description: String::new(),
                error_example: "x".to_string(),
                category: RootCauseCategory::Data,
                resolution_steps: steps.iter().map(|s| s.to_string()).collect(),
            },
            score: 0.951,
            tier: MatchTier::LineOverlap,
            matched_on: vec!["Tier 2: line overlap (score 0.95)".to_string()],
        }
    }

    #[test]
    fn empty_matches_give_empty_comment() {
        assert_eq!(format_kb_comment(&[]), "");
    }

    #[test]
    fn comment_lists_each_match() {
        let text = format_kb_comment(&[kb_match("Seed missing", &["Run seeding", "Retry"]), kb_match("Other", &[])]);
        assert!(text.starts_with(COMMENT_HEADER));
        assert!(text.contains("KB: Seed missing (score: 0.95)"));
        assert!(text.contains("Root cause: data"));
        assert!(text.contains("  1. Run seeding\n  2. Retry"));
        assert!(text.contains("Matched on: Tier 2"));
        assert_eq!(text.matches(&"-".repeat(40)).count(), 1);
    }
}
