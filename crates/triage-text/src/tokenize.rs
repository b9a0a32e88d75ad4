//! Word tokenization and n-gram expansion for TF-IDF.

/// Split on anything that is not a letter, digit or underscore and keep
/// tokens of at least `min_len` characters. Works for any script.
pub fn word_tokens(text: &str, min_len: usize, lowercase: bool) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| !s.is_empty() && s.chars().count() >= min_len)
        .map(|s| if lowercase { s.to_lowercase() } else { s.to_string() })
        .collect()
}

/// Space-joined n-grams for every `n` in `min_n..=max_n`, unigrams first.
pub fn ngrams(tokens: &[String], min_n: usize, max_n: usize) -> Vec<String> {
    let mut terms = Vec::new();
    for n in min_n.max(1)..=max_n {
        if n == 1 {
            terms.extend(tokens.iter().cloned());
            continue;
        }
        terms.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    terms
}
