//! Matcher entry point and configuration.
//!
//! Ties validation, graph construction and solving together behind one
//! call. A [`Matcher`] holds no state between calls; separate work pools
//! can be matched from separate threads with a shared matcher.

use serde::{Deserialize, Serialize};

use crate::error::AssignError;
use crate::graph::CompatibilityGraph;
use crate::matching::HopcroftKarp;
use crate::models::{Job, Matching, Worker};
use crate::validation::validate_input;

/// Order in which jobs (or workers) are presented to the solver.
///
/// Determines which of several maximum matchings is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPolicy {
    /// Keep the caller's order.
    #[default]
    Input,
    /// Lexicographic by ID, independent of snapshot order.
    ById,
}

/// Matcher configuration.
///
/// Every field has a default, so a partial (or empty) JSON object is a
/// valid configuration. Blank and duplicate IDs are always rejected: a
/// repeated worker ID would let one worker take two jobs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Treat a capability listed twice on one worker as invalid input.
    pub strict_capabilities: bool,
    /// Job iteration order.
    pub job_order: OrderPolicy,
    /// Worker iteration order (per-job adjacency order).
    pub worker_order: OrderPolicy,
}

impl MatcherConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, AssignError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets strict capability checking.
    pub fn with_strict_capabilities(mut self, strict: bool) -> Self {
        self.strict_capabilities = strict;
        self
    }

    /// Sets the job order policy.
    pub fn with_job_order(mut self, order: OrderPolicy) -> Self {
        self.job_order = order;
        self
    }

    /// Sets the worker order policy.
    pub fn with_worker_order(mut self, order: OrderPolicy) -> Self {
        self.worker_order = order;
        self
    }
}

/// Validates, builds and solves in one call.
///
/// # Example
///
/// ```
/// use u_assign::matcher::Matcher;
/// use u_assign::models::{Job, Worker};
///
/// let workers = vec![
///     Worker::new("E1").with_capability("A"),
///     Worker::new("E2").with_capability("A"),
/// ];
/// let jobs = vec![Job::new("T1", "A"), Job::new("T2", "A"), Job::new("T3", "B")];
///
/// let matching = Matcher::default().solve(&workers, &jobs).unwrap();
/// assert_eq!(matching.len(), 2);
/// assert!(!matching.contains_job("T3"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    /// Creates a matcher with the given configuration.
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Computes a maximum matching for the snapshot.
    ///
    /// Returns [`AssignError::InvalidInput`] if the snapshot fails
    /// validation. Empty inputs and incompatible pools yield an empty
    /// matching.
    pub fn solve(&self, workers: &[Worker], jobs: &[Job]) -> Result<Matching, AssignError> {
        if let Err(errors) = validate_input(workers, jobs, self.config.strict_capabilities) {
            tracing::warn!(problems = errors.len(), "rejected assignment snapshot");
            return Err(AssignError::InvalidInput(errors));
        }

        if workers.is_empty() || jobs.is_empty() {
            return Ok(Matching::new());
        }

        let graph = self.build_graph(workers, jobs);
        Ok(HopcroftKarp::new(&graph).solve())
    }

    /// Builds the compatibility graph in the configured order.
    pub fn build_graph(&self, workers: &[Worker], jobs: &[Job]) -> CompatibilityGraph {
        let workers = ordered(workers, self.config.worker_order, |w| &w.id);
        let jobs = ordered(jobs, self.config.job_order, |j| &j.id);
        CompatibilityGraph::build(workers, jobs)
    }
}

fn ordered<'a, T>(items: &'a [T], order: OrderPolicy, id: impl Fn(&T) -> &String) -> Vec<&'a T> {
    let mut view: Vec<&T> = items.iter().collect();
    if order == OrderPolicy::ById {
        // Stable, so equal IDs (only possible without validation) keep input order.
        view.sort_by(|a, b| id(a).cmp(id(b)));
    }
    view
}

/// Computes a maximum matching with the default configuration.
pub fn assign(workers: &[Worker], jobs: &[Job]) -> Result<Matching, AssignError> {
    Matcher::default().solve(workers, jobs)
}
