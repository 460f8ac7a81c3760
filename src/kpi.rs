//! Assignment quality metrics (KPIs).
//!
//! Summarizes how well a matching covers its pool.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Matched Jobs | Pairs in the matching |
//! | Unmatched Jobs | Jobs without a worker |
//! | Unmatchable Jobs | Jobs no worker holds the capability for |
//! | Idle Workers | Workers without a job |
//! | Job Coverage | matched / jobs |
//! | Worker Utilization | matched / workers |
//! | Reachable Coverage | matched / (jobs - unmatchable) |

use crate::graph::CompatibilityGraph;
use crate::models::Matching;

/// Assignment performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentKpi {
    /// Number of matched (job, worker) pairs.
    pub matched_jobs: usize,
    /// Jobs left without a worker.
    pub unmatched_jobs: usize,
    /// Jobs whose capability no worker holds (subset of unmatched).
    pub unmatchable_jobs: usize,
    /// Workers left without a job.
    pub idle_workers: usize,
    /// Fraction of jobs matched (0.0..1.0).
    pub job_coverage: f64,
    /// Fraction of workers busy (0.0..1.0).
    pub worker_utilization: f64,
    /// Fraction of matchable jobs matched (0.0..1.0).
    pub reachable_coverage: f64,
}

impl AssignmentKpi {
    /// Computes KPIs for a matching over the graph it was solved on.
    pub fn calculate(matching: &Matching, graph: &CompatibilityGraph) -> Self {
        let jobs = graph.job_count();
        let workers = graph.worker_count();
        let matched = matching.len();
        let unmatchable = graph.isolated_jobs().count();
        let matchable = jobs - unmatchable;

        Self {
            matched_jobs: matched,
            unmatched_jobs: jobs.saturating_sub(matched),
            unmatchable_jobs: unmatchable,
            idle_workers: workers.saturating_sub(matched),
            job_coverage: ratio_or(matched, jobs, 1.0),
            worker_utilization: ratio_or(matched, workers, 0.0),
            reachable_coverage: ratio_or(matched, matchable, 1.0),
        }
    }

    /// Whether every job was matched.
    pub fn is_job_perfect(&self) -> bool {
        self.unmatched_jobs == 0
    }

    /// Whether the matching covers at least `min_coverage` of the jobs.
    pub fn meets_coverage(&self, min_coverage: f64) -> bool {
        self.job_coverage >= min_coverage
    }
}

/// `part / whole`, or `empty` when there is nothing to divide by.
///
/// No jobs means full coverage; no workers means zero utilization.
fn ratio_or(part: usize, whole: usize, empty: f64) -> f64 {
    if whole == 0 {
        empty
    } else {
        part as f64 / whole as f64
    }
}
