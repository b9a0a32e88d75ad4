use regex::Regex;
use std::sync::LazyLock;

use triage_core::constants::{PLACEHOLDER_ID, PLACEHOLDER_IP, PLACEHOLDER_NUM, PLACEHOLDER_TS};

/// A compiled volatile-data pattern and the placeholder it is replaced with.
pub struct VolatilePattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub placeholder: &'static str,
    /// Rejects a match given the full text and the match start offset.
    pub reject: Option<fn(&str, usize) -> bool>,
}

macro_rules! volatile_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

macro_rules! month_names {
    () => {
        r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)"
    };
}

// ── Identifiers ────────────────────────────────────────────────────────────
volatile_pattern!(
    RE_UUID,
    r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}"
);
volatile_pattern!(RE_UUID_NO_HYPHEN, r"(?i)\b[0-9a-f]{32}\b");

// ── ISO-8601 datetime, optional seconds/fraction/zone, Log4j comma ─────────
volatile_pattern!(
    RE_DATETIME_ISO,
    r"\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(?::\d{2})?(?:[.,]\d{1,6})?(?:Z|[+-]\d{2}:?\d{2})?"
);

// ── Named-month datetime: "Feb 6, 2026", "06-Feb-2026" ─────────────────────
volatile_pattern!(
    RE_DATETIME_NAMED_MONTH,
    concat!(
        r"(?i)(?:\d{1,2}[- ]",
        month_names!(),
        r"[- ]\d{4}|",
        month_names!(),
        r"\.?\s+\d{1,2},?\s+\d{4})(?:[T ]\d{2}:\d{2}:\d{2}(?:[.,]\d{1,6})?)?"
    )
);

// ── IPv4, before dot dates ─────────────────────────────────────────────────
volatile_pattern!(RE_IPV4, r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}");

// ── Dates with a four-digit year ───────────────────────────────────────────
volatile_pattern!(
    RE_DATE_SLASH,
    r"\b\d{4}/\d{1,2}/\d{1,2}\b|\b\d{1,2}/\d{1,2}/\d{4}\b"
);
volatile_pattern!(
    RE_DATE_DOT,
    r"\b\d{4}\.\d{1,2}\.\d{1,2}\b|\b\d{1,2}\.\d{1,2}\.\d{4}\b"
);
volatile_pattern!(RE_DATE_ISO, r"\b\d{4}-\d{2}-\d{2}\b");

// ── Time of day ────────────────────────────────────────────────────────────
volatile_pattern!(RE_TIME_OF_DAY, r"\b\d{2}:\d{2}:\d{2}(?:[.,]\d{1,6})?\b");

// ── Long numbers, always last ──────────────────────────────────────────────
volatile_pattern!(RE_LONG_NUMBER, r"\b\d{4,}\b");

/// All patterns in application order. Order matters: earlier patterns
/// consume digits that later, broader patterns would otherwise split.
pub fn all_patterns() -> [VolatilePattern; 10] {
    [
        VolatilePattern {
            name: "uuid",
            regex: &RE_UUID,
            placeholder: PLACEHOLDER_ID,
            reject: None,
        },
        VolatilePattern {
            name: "uuid_no_hyphen",
            regex: &RE_UUID_NO_HYPHEN,
            placeholder: PLACEHOLDER_ID,
            reject: None,
        },
        VolatilePattern {
            name: "datetime_iso",
            regex: &RE_DATETIME_ISO,
            placeholder: PLACEHOLDER_TS,
            reject: None,
        },
        VolatilePattern {
            name: "datetime_named_month",
            regex: &RE_DATETIME_NAMED_MONTH,
            placeholder: PLACEHOLDER_TS,
            reject: None,
        },
        VolatilePattern {
            name: "ipv4",
            regex: &RE_IPV4,
            placeholder: PLACEHOLDER_IP,
            reject: None,
        },
        VolatilePattern {
            name: "date_slash",
            regex: &RE_DATE_SLASH,
            placeholder: PLACEHOLDER_TS,
            reject: None,
        },
        VolatilePattern {
            name: "date_dot",
            regex: &RE_DATE_DOT,
            placeholder: PLACEHOLDER_TS,
            reject: None,
        },
        VolatilePattern {
            name: "date_iso",
            regex: &RE_DATE_ISO,
            placeholder: PLACEHOLDER_TS,
            reject: None,
        },
        VolatilePattern {
            name: "time_of_day",
            regex: &RE_TIME_OF_DAY,
            placeholder: PLACEHOLDER_TS,
            reject: Some(follows_numeric_separator),
        },
        VolatilePattern {
            name: "long_number",
            regex: &RE_LONG_NUMBER,
            placeholder: PLACEHOLDER_NUM,
            reject: None,
        },
    ]
}

/// True when the match is preceded by a digit and a `.` or `:`, as in the
/// tail of a version string (`1.10:20:30`) or a longer clock value.
fn follows_numeric_separator(text: &str, start: usize) -> bool {
    let mut before = text[..start].chars().rev();
    matches!(before.next(), Some('.' | ':')) && before.next().is_some_and(|c| c.is_numeric())
}
