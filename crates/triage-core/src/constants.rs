/// Triage system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder substituted for UUIDs and 32-hex identifiers.
pub const PLACEHOLDER_ID: &str = "<ID>";

/// Placeholder substituted for dates, datetimes and times of day.
pub const PLACEHOLDER_TS: &str = "<TS>";

/// Placeholder substituted for IPv4 addresses.
pub const PLACEHOLDER_IP: &str = "<IP>";

/// Placeholder substituted for runs of four or more digits.
pub const PLACEHOLDER_NUM: &str = "<NUM>";

/// Version of the normalization algorithm mixed into error fingerprints.
/// Bump when normalization changes so stale feedback stops matching.
pub const FINGERPRINT_VERSION: u32 = 1;

/// Number of hex characters kept from the signature hash for a cluster id.
pub const CLUSTER_ID_HEX_LEN: usize = 16;

/// Characters kept from each end of a query in "no match" debug previews.
pub const LOG_PREVIEW_CHARS: usize = 220;

/// Tolerance used when validating that weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;
