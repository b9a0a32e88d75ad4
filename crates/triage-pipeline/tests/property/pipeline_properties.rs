use proptest::prelude::*;
use triage_pipeline::log_extraction::extract_error_blocks;

fn log_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,20}".prop_map(|s| format!("2026-02-09 10:00:00 [INFO] {s}")),
        "[a-z ]{0,20}".prop_map(|s| format!("2026-02-09 10:00:01 [ERROR] {s}")),
        "[a-z .()]{0,20}".prop_map(|s| format!("\tat {s}")),
        "[a-z ]{0,20}",
    ]
}

proptest! {
    #[test]
    fn extracted_lines_come_from_the_log(lines in prop::collection::vec(log_line(), 0..30)) {
        let log = lines.join("\n");
        let blocks = extract_error_blocks(&log);
        for line in blocks.lines().filter(|l| !l.is_empty()) {
            prop_assert!(lines.iter().any(|l| l == line), "unexpected line {:?}", line);
        }
    }

    #[test]
    fn every_error_line_is_kept(lines in prop::collection::vec(log_line(), 0..30)) {
        let log = lines.join("\n");
        let blocks = extract_error_blocks(&log);
        let errors = lines.iter().filter(|l| l.contains("[ERROR]")).count();
        prop_assert_eq!(blocks.lines().filter(|l| l.contains("[ERROR]")).count(), errors);
    }
}
