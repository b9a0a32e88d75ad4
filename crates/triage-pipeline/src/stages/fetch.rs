use tracing::info;

use triage_core::errors::TriageResult;
use triage_core::models::TriageReport;
use triage_core::traits::FailureSource;

/// Fetch every result of a run and summarize statuses. Source errors fail
/// the run: without results there is nothing to triage.
pub fn fetch_report(source: &dyn FailureSource, run_id: u64) -> TriageResult<TriageReport> {
    let run_name = source.run_name(run_id)?;
    let results = source.test_results(run_id)?;
    let report = TriageReport::from_results(run_id, run_name, results);
    info!(
        run_id,
        total = report.total_results,
        passed = report.passed_count,
        failed = report.failed_count,
        broken = report.broken_count,
        skipped = report.skipped_count,
        "run fetched"
    );
    Ok(report)
}
