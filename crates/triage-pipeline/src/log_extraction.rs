//! ERROR-block extraction from plain-text log attachments.

use regex::Regex;
use std::sync::LazyLock;

static RE_LOG_LINE_START: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}").ok());

static RE_ERROR_LEVEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\[error\]").ok());

static RE_EXPLICIT_ERROR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:ERROR|FATAL|SEVERE|CRITICAL)\b|(?:Exception|Error|Traceback|Caused by)\b|(?:FAILED|Failed to)\b",
    )
    .ok()
});

fn is_match(re: &LazyLock<Option<Regex>>, text: &str) -> bool {
    re.as_ref().is_some_and(|r| r.is_match(text))
}

/// ERROR blocks of `log`, joined by a blank line. Empty when none.
///
/// A block opens on a timestamped line containing `[ERROR]` and keeps every
/// following line until a timestamped line without `[ERROR]`. A timestamped
/// `[ERROR]` line closes the current block and opens the next one.
pub fn extract_error_blocks(log: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut in_block = false;

    for line in log.lines() {
        let timestamped = is_match(&RE_LOG_LINE_START, line);
        let error = is_match(&RE_ERROR_LEVEL, line);

        if timestamped && error {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
            }
            current = vec![line];
            in_block = true;
        } else if in_block {
            if timestamped {
                blocks.push(current.join("\n"));
                current.clear();
                in_block = false;
            } else {
                current.push(line);
            }
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks.join("\n\n")
}

/// True when the snippet carries an explicit error marker.
pub fn has_explicit_errors(snippet: &str) -> bool {
    is_match(&RE_EXPLICIT_ERROR, snippet)
}
