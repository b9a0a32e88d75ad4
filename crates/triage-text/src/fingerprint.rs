//! Error-text fingerprints: the stable key feedback is stored under.

use triage_core::constants::FINGERPRINT_VERSION;

use crate::normalize::normalize;

/// 64-hex blake3 digest of `"v{FINGERPRINT_VERSION}:{normalize(text)}"`.
///
/// Texts that differ only in volatile values share a fingerprint. The
/// version prefix retires old fingerprints whenever normalization changes.
pub fn compute_fingerprint(text: &str) -> String {
    let payload = format!("v{FINGERPRINT_VERSION}:{}", normalize(text));
    blake3::hash(payload.as_bytes()).to_hex().to_string()
}
