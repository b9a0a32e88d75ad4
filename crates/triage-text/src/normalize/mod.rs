//! Volatile-data normalization.
//!
//! Replaces identifiers, timestamps, addresses and long numbers with stable
//! placeholders so that error texts differing only in run-specific values
//! compare equal. Case, punctuation and stop words are left untouched.

pub mod patterns;

use std::borrow::Cow;

use regex::{NoExpand, Regex};

/// Replace volatile substrings with placeholders.
///
/// Pure and deterministic. Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut current = match apply_once(text) {
        Cow::Borrowed(_) => return text.to_string(),
        Cow::Owned(s) => s,
    };
    // A placeholder can introduce a word boundary that exposes a new match.
    // Every changing pass removes digits or hex letters, so this terminates.
    loop {
        match apply_once(&current) {
            Cow::Borrowed(_) => return current,
            Cow::Owned(next) => current = next,
        }
    }
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `normalize` followed by `collapse_whitespace`, the form used for substring checks.
pub fn normalize_collapsed(text: &str) -> String {
    collapse_whitespace(&normalize(text))
}

/// Names of patterns whose regex failed to compile. Those patterns are skipped.
pub fn unavailable_patterns() -> Vec<&'static str> {
    patterns::all_patterns()
        .iter()
        .filter(|p| p.regex.is_none())
        .map(|p| p.name)
        .collect()
}

fn apply_once(text: &str) -> Cow<'_, str> {
    let mut out: Cow<'_, str> = Cow::Borrowed(text);
    for pattern in patterns::all_patterns() {
        let Some(re) = pattern.regex.as_ref() else {
            continue;
        };
        let replaced = match pattern.reject {
            Some(reject) => replace_unless(re, &out, pattern.placeholder, reject),
            None => match re.replace_all(&out, NoExpand(pattern.placeholder)) {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            },
        };
        if let Some(s) = replaced {
            out = Cow::Owned(s);
        }
    }
    out
}

/// `replace_all` that leaves matches accepted by `reject` in place.
/// Returns `None` when nothing was replaced.
fn replace_unless(
    re: &Regex,
    text: &str,
    placeholder: &str,
    reject: fn(&str, usize) -> bool,
) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut replaced = false;
    for m in re.find_iter(text) {
        if reject(text, m.start()) {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        out.push_str(placeholder);
        last = m.end();
        replaced = true;
    }
    if !replaced {
        return None;
    }
    out.push_str(&text[last..]);
    Some(out)
}
