//! Test fixture loader for triage golden datasets.
//!
//! Provides typed deserialization of fixture JSON/YAML files and the golden
//! scenario shapes shared by integration tests across crates.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use triage_core::models::{FailureId, FailureRecord};

/// This crate's manifest directory; fixture paths are relative to it.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn read_fixture(relative_path: &str) -> (PathBuf, String) {
    let path = fixtures_root().join(relative_path);
    match fs::read_to_string(&path) {
        Ok(text) => (path, text),
        Err(e) => panic!("cannot read fixture {}: {e}", path.display()),
    }
}

/// Deserialize a JSON fixture. Panics on a missing or malformed file.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let (path, text) = read_fixture(relative_path);
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("bad JSON in {}: {e}", path.display()))
}

/// Deserialize a YAML fixture. Panics on a missing or malformed file.
pub fn load_yaml_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let (path, text) = read_fixture(relative_path);
    serde_yaml::from_str(&text).unwrap_or_else(|e| panic!("bad YAML in {}: {e}", path.display()))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Absolute path of a fixture file or directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// JSON files directly under `subdir`, sorted. Empty when `subdir` is absent.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixture_path(subdir);
    let Ok(read) = fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = read
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| is_json(path))
        .collect();
    files.sort();
    files
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

// ── Golden scenario shapes ─────────────────────────────────────────────────

/// A clustering scenario: input failures and the expected partition.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusteringScenario {
    pub description: String,
    pub similarity_threshold: f64,
    pub failures: Vec<FailureRecord>,
    pub expected_cluster_count: usize,
    /// Expected member groups, each sorted ascending. Order is irrelevant.
    #[serde(default)]
    pub expected_groups: Vec<Vec<FailureId>>,
    #[serde(default)]
    pub expected_unclustered: Option<usize>,
}

/// A matching scenario against the golden knowledge base.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingScenario {
    pub description: String,
    pub query: String,
    /// Expected id of the top result; `None` means no results.
    pub expected_top_id: Option<String>,
    /// Expected tier number of the top result.
    #[serde(default)]
    pub expected_tier: Option<u8>,
    #[serde(default)]
    pub expected_score: Option<f64>,
}

/// One normalization sample.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizationSample {
    pub input: String,
    pub expected: String,
}
