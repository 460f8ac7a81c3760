//! Matching (solution) model.
//!
//! A matching is a set of (job, worker) pairs in which no job and no
//! worker appears twice. It is the only output of a solver run; the
//! caller decides what to do with it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::AssignError;
use crate::pool::AssignmentSink;

/// A single job → worker assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Assigned job ID.
    pub job_id: String,
    /// Worker taking the job.
    pub worker_id: String,
}

/// Counters collected while solving.
///
/// `augmentations_per_phase[i]` is the number of augmenting paths found
/// in phase `i`; their sum equals the matching size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingStats {
    /// Number of BFS layering passes that found at least one augmenting path.
    pub phases: usize,
    /// Augmenting paths applied in each phase.
    pub augmentations_per_phase: Vec<usize>,
}

/// A maximum-cardinality matching between jobs and workers.
///
/// Pairs are ordered by the job order the solver used. Lookups in both
/// directions are O(1). Deserializing rebuilds the lookup indexes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "MatchingRepr")]
pub struct Matching {
    pairs: Vec<Pair>,
    stats: MatchingStats,
    #[serde(skip)]
    by_job: HashMap<String, usize>,
    #[serde(skip)]
    by_worker: HashMap<String, usize>,
}

/// Wire form of [`Matching`]: the serialized fields without the indexes.
#[derive(Deserialize)]
struct MatchingRepr {
    pairs: Vec<Pair>,
    #[serde(default)]
    stats: MatchingStats,
}

impl From<MatchingRepr> for Matching {
    fn from(repr: MatchingRepr) -> Self {
        Self::from_pairs(repr.pairs, repr.stats)
    }
}

impl Pair {
    /// Creates a new pair.
    pub fn new(job_id: impl Into<String>, worker_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            worker_id: worker_id.into(),
        }
    }
}

impl MatchingStats {
    /// Total augmentations across all phases.
    pub fn total_augmentations(&self) -> usize {
        self.augmentations_per_phase.iter().sum()
    }
}

impl Matching {
    /// Creates an empty matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a matching from pairs and solver counters.
    ///
    /// Pairs are indexed as given; if a job or worker repeats, the later
    /// pair shadows the earlier one in lookups and [`is_valid`](Self::is_valid)
    /// reports `false`.
    pub fn from_pairs(pairs: Vec<Pair>, stats: MatchingStats) -> Self {
        let mut by_job = HashMap::with_capacity(pairs.len());
        let mut by_worker = HashMap::with_capacity(pairs.len());
        for (i, pair) in pairs.iter().enumerate() {
            by_job.insert(pair.job_id.clone(), i);
            by_worker.insert(pair.worker_id.clone(), i);
        }
        Self {
            pairs,
            stats,
            by_job,
            by_worker,
        }
    }

    /// Number of matched pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no job was matched.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Matched pairs in solver order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Solver counters.
    pub fn stats(&self) -> &MatchingStats {
        &self.stats
    }

    /// Worker assigned to a job, if any.
    pub fn worker_for(&self, job_id: &str) -> Option<&str> {
        self.by_job
            .get(job_id)
            .map(|&i| self.pairs[i].worker_id.as_str())
    }

    /// Job assigned to a worker, if any.
    pub fn job_for(&self, worker_id: &str) -> Option<&str> {
        self.by_worker
            .get(worker_id)
            .map(|&i| self.pairs[i].job_id.as_str())
    }

    /// Whether the job is matched.
    pub fn contains_job(&self, job_id: &str) -> bool {
        self.by_job.contains_key(job_id)
    }

    /// Whether the worker is matched.
    pub fn contains_worker(&self, worker_id: &str) -> bool {
        self.by_worker.contains_key(worker_id)
    }

    /// Job ID → worker ID map, sorted by job ID.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.pairs
            .iter()
            .map(|p| (p.job_id.clone(), p.worker_id.clone()))
            .collect()
    }

    /// Whether every job and every worker appears in at most one pair.
    pub fn is_valid(&self) -> bool {
        self.by_job.len() == self.pairs.len() && self.by_worker.len() == self.pairs.len()
    }

    /// Hands every pair to `sink`, in order.
    ///
    /// Stops at the first rejected pair and returns its error; pairs
    /// before it have already been applied. Returns the number of pairs
    /// applied on success.
    pub fn apply_to<S: AssignmentSink + ?Sized>(&self, sink: &mut S) -> Result<usize, AssignError> {
        for pair in &self.pairs {
            sink.apply_pair(&pair.job_id, &pair.worker_id)?;
        }
        Ok(self.pairs.len())
    }

    /// Consumes the matching, returning its pairs.
    pub fn into_pairs(self) -> Vec<Pair> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matching {
        Matching::from_pairs(
            vec![Pair::new("T2", "E1"), Pair::new("T1", "E3")],
            MatchingStats {
                phases: 1,
                augmentations_per_phase: vec![2],
            },
        )
    }

    #[test]
    fn test_matching_lookups() {
        let m = sample();
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
        assert_eq!(m.worker_for("T1"), Some("E3"));
        assert_eq!(m.worker_for("T9"), None);
        assert_eq!(m.job_for("E1"), Some("T2"));
        assert!(m.contains_job("T2"));
        assert!(m.contains_worker("E3"));
        assert!(!m.contains_worker("E2"));
        assert!(m.is_valid());
    }

    #[test]
    fn test_matching_to_map_sorted() {
        let map = sample().to_map();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["T1", "T2"]);
        assert_eq!(map["T2"], "E1");
    }

    #[test]
    fn test_matching_invalid_when_worker_repeats() {
        let m = Matching::from_pairs(
            vec![Pair::new("T1", "E1"), Pair::new("T2", "E1")],
            MatchingStats::default(),
        );
        assert!(!m.is_valid());
    }

    #[test]
    fn test_matching_empty() {
        let m = Matching::new();
        assert!(m.is_empty());
        assert!(m.is_valid());
        assert_eq!(m.stats().total_augmentations(), 0);
    }

    #[test]
    fn test_matching_serializes_pairs_and_stats() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["pairs"][0]["job_id"], "T2");
        assert_eq!(json["stats"]["phases"], 1);
        assert!(json.get("by_job").is_none());
    }

    #[test]
    fn test_matching_deserialize_rebuilds_lookups() {
        let json = serde_json::to_string(&sample()).unwrap();
        let m: Matching = serde_json::from_str(&json).unwrap();
        assert_eq!(m.pairs(), sample().pairs());
        assert_eq!(m.stats().phases, 1);
        assert_eq!(m.worker_for("T1"), Some("E3"));
        assert_eq!(m.job_for("E1"), Some("T2"));
        assert!(m.contains_worker("E3"));
        assert!(m.is_valid());
    }

    #[test]
    fn test_matching_deserialize_without_stats() {
        let m: Matching =
            serde_json::from_str(r#"{"pairs":[{"job_id":"T1","worker_id":"E1"}]}"#).unwrap();
        assert_eq!(m.worker_for("T1"), Some("E1"));
        assert_eq!(m.stats(), &MatchingStats::default());
    }

    #[test]
    fn test_into_pairs_keeps_solver_order() {
        let pairs = sample().into_pairs();
        assert_eq!(pairs, vec![Pair::new("T2", "E1"), Pair::new("T1", "E3")]);
    }

    #[test]
    fn test_apply_to_stops_on_first_error() {
        struct RejectSecond(usize);
        impl AssignmentSink for RejectSecond {
            fn apply_pair(&mut self, job_id: &str, _worker_id: &str) -> Result<(), AssignError> {
                self.0 += 1;
                if self.0 == 2 {
                    return Err(AssignError::UnknownJob(job_id.to_string()));
                }
                Ok(())
            }
        }

        let mut sink = RejectSecond(0);
        let err = sample().apply_to(&mut sink).unwrap_err();
        assert!(matches!(err, AssignError::UnknownJob(ref id) if id == "T1"));
        assert_eq!(sink.0, 2);
    }
}
