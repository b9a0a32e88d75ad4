//! Turning a group of member failures into a [`FailureCluster`].

use std::collections::HashMap;

use triage_core::config::ClusteringConfig;
use triage_core::constants::CLUSTER_ID_HEX_LEN;
use triage_core::models::{ClusterSignature, FailureCluster, FailureRecord};
use triage_text::{collapse_whitespace, normalize};

/// Build a cluster from its members. `members` must be non-empty.
pub fn assemble(members: &[&FailureRecord], config: &ClusteringConfig) -> Option<FailureCluster> {
    let representative = choose_representative(members)?;

    let mut member_ids: Vec<_> = members.iter().map(|m| m.id).collect();
    member_ids.sort_unstable();

    let signature = build_signature(representative, config);
    Some(FailureCluster {
        cluster_id: signature_hash(&signature, None),
        label: build_label(representative, config.max_label_length),
        signature,
        member_ids,
        representative_id: representative.id,
        example_message: representative.message.clone(),
        example_trace_snippet: first_lines(representative.trace_text(), config.trace_snippet_lines),
    })
}

/// Longest message wins; ties go to the smallest id.
pub fn choose_representative<'a>(members: &[&'a FailureRecord]) -> Option<&'a FailureRecord> {
    members.iter().copied().min_by(|a, b| {
        message_len(b)
            .cmp(&message_len(a))
            .then_with(|| a.id.cmp(&b.id))
    })
}

/// Re-hash clusters whose ids collide within one run, salting with the
/// representative id. Every colliding cluster is re-hashed, so the outcome
/// does not depend on cluster order.
pub fn resolve_id_collisions(clusters: &mut [FailureCluster]) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for cluster in clusters.iter() {
        *seen.entry(cluster.cluster_id.clone()).or_insert(0) += 1;
    }
    for cluster in clusters.iter_mut() {
        if seen.get(&cluster.cluster_id).copied().unwrap_or(0) > 1 {
            cluster.cluster_id = signature_hash(&cluster.signature, Some(cluster.representative_id));
        }
    }
}

fn message_len(record: &FailureRecord) -> usize {
    record.message_text().map_or(0, |m| m.trim().chars().count())
}

fn build_signature(rep: &FailureRecord, config: &ClusteringConfig) -> ClusterSignature {
    let message_pattern = rep.message_text().map(|m| {
        collapse_whitespace(&normalize(m))
            .chars()
            .take(config.message_pattern_length)
            .collect::<String>()
    });
    let trace_head = match message_pattern {
        Some(_) => None,
        None => first_trace_line(rep).map(normalize),
    };
    ClusterSignature {
        message_pattern,
        trace_head,
        category: rep.category_text().map(|c| c.trim().to_string()),
    }
}

fn signature_hash(signature: &ClusterSignature, salt: Option<u64>) -> String {
    let mut hasher = blake3::Hasher::new();
    for part in [
        signature.message_pattern.as_deref(),
        signature.category.as_deref(),
        signature.trace_head.as_deref(),
    ] {
        hasher.update(part.unwrap_or("").as_bytes());
        hasher.update(b"\n");
    }
    if let Some(salt) = salt {
        hasher.update(salt.to_string().as_bytes());
    }
    let hex = hasher.finalize().to_hex();
    hex.as_str()[..CLUSTER_ID_HEX_LEN].to_string()
}

fn build_label(rep: &FailureRecord, max_len: usize) -> String {
    if let Some(message) = rep.message_text() {
        return truncate_label(&collapse_whitespace(message), max_len);
    }
    if let Some(line) = first_trace_line(rep) {
        return truncate_label(line, max_len);
    }
    if let Some(category) = rep.category_text() {
        return truncate_label(&format!("Category: {}", category.trim()), max_len);
    }
    format!("Failure #{}", rep.id)
}

fn truncate_label(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

fn first_trace_line(rep: &FailureRecord) -> Option<&str> {
    rep.trace_text()?
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
}

fn first_lines(text: Option<&str>, n: usize) -> Option<String> {
    let lines: Vec<&str> = text?.trim().lines().take(n).collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClusteringConfig {
        ClusteringConfig::default()
    }

    #[test]
    fn representative_is_longest_message_then_smallest_id() {
        let a = FailureRecord::new(5).with_message("short");
        let b = FailureRecord::new(9).with_message("a much longer message");
        let c = FailureRecord::new(3).with_message("a much longer message");
        let rep = choose_representative(&[&a, &b, &c]).unwrap();
        assert_eq!(rep.id, 3);
    }

    #[test]
    fn representative_without_messages_is_smallest_id() {
        let a = FailureRecord::new(8);
        let b = FailureRecord::new(2).with_trace("at x");
        assert_eq!(choose_representative(&[&a, &b]).unwrap().id, 2);
    }

    #[test]
    fn label_prefers_message_then_trace_then_category() {
        let with_msg = FailureRecord::new(1).with_message("Boom\n  happened").with_trace("t");
        assert_eq!(build_label(&with_msg, 120), "Boom happened");

        let with_trace = FailureRecord::new(1).with_trace("\n  java.lang.IllegalStateException\n at x");
        assert_eq!(build_label(&with_trace, 120), "java.lang.IllegalStateException");

        let with_cat = FailureRecord::new(1).with_category("env");
        assert_eq!(build_label(&with_cat, 120), "Category: env");

        assert_eq!(build_label(&FailureRecord::new(77), 120), "Failure #77");
    }

    #[test]
    fn long_labels_are_truncated_with_ellipsis() {
        let rep = FailureRecord::new(1).with_message("x".repeat(300));
        let label = build_label(&rep, 120);
        assert_eq!(label.chars().count(), 120);
        assert!(label.ends_with("..."));
    }

    #[test]
    fn cluster_id_ignores_member_ids_and_volatile_values() {
        let a = FailureRecord::new(1).with_message("Order 123456 failed").with_category("data");
        let b = FailureRecord::new(2).with_message("Order 999999 failed").with_category("data");
        let ca = assemble(&[&a], &config()).unwrap();
        let cb = assemble(&[&b], &config()).unwrap();
        assert_eq!(ca.cluster_id, cb.cluster_id);
        assert_eq!(ca.cluster_id.len(), CLUSTER_ID_HEX_LEN);
    }

    #[test]
    fn trace_head_only_used_without_message() {
        let rep = FailureRecord::new(1).with_message("m").with_trace("first\nsecond");
        assert!(build_signature(&rep, &config()).trace_head.is_none());
        let rep = FailureRecord::new(1).with_trace("first\nsecond");
        assert_eq!(build_signature(&rep, &config()).trace_head.as_deref(), Some("first"));
    }

    #[test]
    fn assembled_cluster_caches_representative_examples() {
        let trace = (1..=8).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let a = FailureRecord::new(4).with_message("longest message here").with_trace(trace);
        let b = FailureRecord::new(2).with_message("short");
        let cluster = assemble(&[&a, &b], &config()).unwrap();
        assert_eq!(cluster.member_ids, vec![2, 4]);
        assert_eq!(cluster.representative_id, 4);
        assert_eq!(cluster.example_message.as_deref(), Some("longest message here"));
        assert_eq!(
            cluster.example_trace_snippet.as_deref(),
            Some("line 1\nline 2\nline 3\nline 4\nline 5")
        );
    }

    #[test]
    fn colliding_ids_are_rehashed_deterministically() {
        let a = FailureRecord::new(1).with_message("same");
        let b = FailureRecord::new(2).with_message("same");
        let mut clusters = vec![
            assemble(&[&a], &config()).unwrap(),
            assemble(&[&b], &config()).unwrap(),
        ];
        assert_eq!(clusters[0].cluster_id, clusters[1].cluster_id);
        resolve_id_collisions(&mut clusters);
        assert_ne!(clusters[0].cluster_id, clusters[1].cluster_id);

        let mut reversed = vec![
            assemble(&[&b], &config()).unwrap(),
            assemble(&[&a], &config()).unwrap(),
        ];
        resolve_id_collisions(&mut reversed);
        assert_eq!(reversed[1].cluster_id, clusters[0].cluster_id);
    }
}
