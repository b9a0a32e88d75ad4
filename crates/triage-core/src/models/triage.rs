use serde::{Deserialize, Serialize};

use super::{FailureId, FailureRecord};

/// Outcome of a single test result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Broken,
    Skipped,
    Unknown,
}

impl TestStatus {
    /// Parse case-insensitively. Unrecognized or missing values map to `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("passed") => Self::Passed,
            Some("failed") => Self::Failed,
            Some("broken") => Self::Broken,
            Some("skipped") => Self::Skipped,
            _ => Self::Unknown,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed | Self::Broken)
    }
}

/// A raw test result as returned by the failure source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: FailureId,
    #[serde(default)]
    pub name: Option<String>,
    /// Raw status string; see [`TestStatus::parse`].
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub trace: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub test_case_id: Option<u64>,
}

impl TestResult {
    pub fn status(&self) -> TestStatus {
        TestStatus::parse(self.status.as_deref())
    }

    pub fn to_failure_record(&self) -> FailureRecord {
        FailureRecord {
            id: self.id,
            message: self.message.clone(),
            trace: self.trace.clone(),
            category: self.category.clone(),
        }
    }
}

/// Status counts for one run plus its failed results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageReport {
    pub run_id: u64,
    pub run_name: Option<String>,
    pub total_results: usize,
    pub passed_count: usize,
    pub failed_count: usize,
    pub broken_count: usize,
    pub skipped_count: usize,
    pub unknown_count: usize,
    /// Failed and broken results, in source order.
    pub failed_tests: Vec<TestResult>,
}

impl TriageReport {
    pub fn from_results(run_id: u64, run_name: Option<String>, results: Vec<TestResult>) -> Self {
        let mut report = Self {
            run_id,
            run_name,
            total_results: results.len(),
            passed_count: 0,
            failed_count: 0,
            broken_count: 0,
            skipped_count: 0,
            unknown_count: 0,
            failed_tests: Vec::new(),
        };
        for result in results {
            match result.status() {
                TestStatus::Passed => report.passed_count += 1,
                TestStatus::Failed => report.failed_count += 1,
                TestStatus::Broken => report.broken_count += 1,
                TestStatus::Skipped => report.skipped_count += 1,
                TestStatus::Unknown => report.unknown_count += 1,
            }
            if result.status().is_failure() {
                report.failed_tests.push(result);
            }
        }
        report
    }

    pub fn failure_count(&self) -> usize {
        self.failed_count + self.broken_count
    }

    pub fn failure_records(&self) -> Vec<FailureRecord> {
        self.failed_tests
            .iter()
            .map(TestResult::to_failure_record)
            .collect()
    }

    pub fn test_case_id(&self, id: FailureId) -> Option<u64> {
        self.failed_tests
            .iter()
            .find(|t| t.id == id)
            .and_then(|t| t.test_case_id)
    }
}
