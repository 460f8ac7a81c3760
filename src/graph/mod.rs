//! Job–worker compatibility graph.
//!
//! Converts a worker/job snapshot into a bipartite graph with dense
//! integer vertex indices. Job `j` is adjacent to worker `w` iff `w`
//! holds `j`'s required capability.
//!
//! # Construction
//!
//! 1. Index workers by capability: `capability → [worker index]`, in
//!    worker order. A worker repeating a capability is indexed once.
//! 2. For each job, copy the worker list of its required capability into
//!    a compressed adjacency array.
//!
//! # Complexity
//! O(W·c + J + E) where W=workers, c=average capabilities per worker,
//! J=jobs, E=edges.

use std::collections::HashMap;
use std::fmt;

use crate::models::{Job, Worker};

/// Bipartite compatibility graph over one snapshot.
///
/// Jobs and workers are addressed by their position in the sequences
/// passed to [`build`](Self::build). Adjacency lists preserve worker
/// order, which makes solver tie-breaking reproducible.
///
/// # Example
///
/// ```
/// use u_assign::graph::CompatibilityGraph;
/// use u_assign::models::{Job, Worker};
///
/// let workers = vec![
///     Worker::new("E1").with_capability("A"),
///     Worker::new("E2").with_capabilities(["A", "B"]),
/// ];
/// let jobs = vec![Job::new("T1", "B"), Job::new("T2", "C")];
///
/// let graph = CompatibilityGraph::build(&workers, &jobs);
/// assert_eq!(graph.workers_of(0), &[1]);
/// assert!(graph.workers_of(1).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompatibilityGraph {
    job_ids: Vec<String>,
    job_capabilities: Vec<String>,
    worker_ids: Vec<String>,
    /// `edges[offsets[j]..offsets[j + 1]]` are the workers of job `j`.
    offsets: Vec<usize>,
    edges: Vec<usize>,
    worker_degree: Vec<usize>,
}

impl CompatibilityGraph {
    /// Builds the graph from a snapshot.
    ///
    /// Accepts any iterator of borrowed workers and jobs, so callers can
    /// pass slices directly or a reordered view.
    pub fn build<'a, W, J>(workers: W, jobs: J) -> Self
    where
        W: IntoIterator<Item = &'a Worker>,
        J: IntoIterator<Item = &'a Job>,
    {
        let mut worker_ids = Vec::new();
        let mut by_capability: HashMap<&'a str, Vec<usize>> = HashMap::new();

        for (w, worker) in workers.into_iter().enumerate() {
            worker_ids.push(worker.id.clone());
            for cap in &worker.capabilities {
                let holders = by_capability.entry(cap.as_str()).or_default();
                // Capabilities of one worker are visited together, so a
                // repeat can only collide with the last entry.
                if holders.last() != Some(&w) {
                    holders.push(w);
                }
            }
        }

        let mut job_ids = Vec::new();
        let mut job_capabilities = Vec::new();
        let mut offsets = vec![0];
        let mut edges = Vec::new();
        let mut worker_degree = vec![0; worker_ids.len()];

        for job in jobs {
            job_ids.push(job.id.clone());
            job_capabilities.push(job.required_capability.clone());
            if let Some(holders) = by_capability.get(job.required_capability.as_str()) {
                edges.extend_from_slice(holders);
                for &w in holders {
                    worker_degree[w] += 1;
                }
            }
            offsets.push(edges.len());
        }

        tracing::debug!(
            jobs = job_ids.len(),
            workers = worker_ids.len(),
            capabilities = by_capability.len(),
            edges = edges.len(),
            "built compatibility graph"
        );

        Self {
            job_ids,
            job_capabilities,
            worker_ids,
            offsets,
            edges,
            worker_degree,
        }
    }

    /// Number of job vertices.
    #[inline]
    pub fn job_count(&self) -> usize {
        self.job_ids.len()
    }

    /// Number of worker vertices.
    #[inline]
    pub fn worker_count(&self) -> usize {
        self.worker_ids.len()
    }

    /// Number of compatible (job, worker) pairs.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Total vertex count (jobs + workers).
    pub fn vertex_count(&self) -> usize {
        self.job_count() + self.worker_count()
    }

    /// Whether either side is empty, in which case no pair can exist.
    pub fn is_degenerate(&self) -> bool {
        self.job_ids.is_empty() || self.worker_ids.is_empty() || self.edges.is_empty()
    }

    /// Compatible workers of a job, in worker order.
    ///
    /// # Panics
    /// If `job` is not a valid job index.
    #[inline]
    pub fn workers_of(&self, job: usize) -> &[usize] {
        &self.edges[self.offsets[job]..self.offsets[job + 1]]
    }

    /// Number of workers able to take a job.
    pub fn job_degree(&self, job: usize) -> usize {
        self.offsets[job + 1] - self.offsets[job]
    }

    /// Number of jobs a worker could take.
    pub fn worker_degree(&self, worker: usize) -> usize {
        self.worker_degree[worker]
    }

    /// ID of a job vertex.
    pub fn job_id(&self, job: usize) -> &str {
        &self.job_ids[job]
    }

    /// ID of a worker vertex.
    pub fn worker_id(&self, worker: usize) -> &str {
        &self.worker_ids[worker]
    }

    /// Required capability of a job vertex.
    pub fn job_capability(&self, job: usize) -> &str {
        &self.job_capabilities[job]
    }

    /// Jobs no worker can take.
    pub fn isolated_jobs(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.job_count()).filter(|&j| self.job_degree(j) == 0)
    }

    /// Workers compatible with no job.
    pub fn isolated_workers(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.worker_count()).filter(|&w| self.worker_degree[w] == 0)
    }

    /// Whether job `job` and worker `worker` are adjacent.
    pub fn has_edge(&self, job: usize, worker: usize) -> bool {
        self.workers_of(job).contains(&worker)
    }
}

/// Lists every vertex with its neighbours, jobs first.
impl fmt::Display for CompatibilityGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for j in 0..self.job_count() {
            write!(f, "job {} [{}] ->", self.job_ids[j], self.job_capabilities[j])?;
            for &w in self.workers_of(j) {
                write!(f, " {}", self.worker_ids[w])?;
            }
            writeln!(f)?;
        }
        let mut jobs_by_worker = vec![Vec::new(); self.worker_count()];
        for j in 0..self.job_count() {
            for &w in self.workers_of(j) {
                jobs_by_worker[w].push(j);
            }
        }
        for (w, jobs) in jobs_by_worker.iter().enumerate() {
            write!(f, "worker {} ->", self.worker_ids[w])?;
            for &j in jobs {
                write!(f, " {}", self.job_ids[j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (Vec<Worker>, Vec<Job>) {
        let workers = vec![
            Worker::new("E1").with_capability("A"),
            Worker::new("E2").with_capability("B"),
            Worker::new("E3").with_capabilities(["A", "B"]),
        ];
        let jobs = vec![Job::new("T1", "A"), Job::new("T2", "B")];
        (workers, jobs)
    }

    #[test]
    fn test_build_adjacency() {
        let (workers, jobs) = scenario();
        let g = CompatibilityGraph::build(&workers, &jobs);

        assert_eq!(g.job_count(), 2);
        assert_eq!(g.worker_count(), 3);
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.workers_of(0), &[0, 2]);
        assert_eq!(g.workers_of(1), &[1, 2]);
        assert!(g.has_edge(0, 2));
        assert!(!g.has_edge(0, 1));
        assert_eq!(g.job_id(1), "T2");
        assert_eq!(g.worker_id(2), "E3");
        assert_eq!(g.job_capability(0), "A");
    }

    #[test]
    fn test_degrees() {
        let (workers, jobs) = scenario();
        let g = CompatibilityGraph::build(&workers, &jobs);
        assert_eq!(g.job_degree(0), 2);
        assert_eq!(g.worker_degree(0), 1);
        assert_eq!(g.worker_degree(2), 2);
    }

    #[test]
    fn test_isolated_vertices() {
        let workers = vec![
            Worker::new("E1").with_capability("A"),
            Worker::new("E2"),
        ];
        let jobs = vec![Job::new("T1", "A"), Job::new("T2", "Z")];
        let g = CompatibilityGraph::build(&workers, &jobs);

        assert_eq!(g.isolated_jobs().collect::<Vec<_>>(), vec![1]);
        assert_eq!(g.isolated_workers().collect::<Vec<_>>(), vec![1]);
        assert!(!g.is_degenerate());
    }

    #[test]
    fn test_duplicate_capability_indexed_once() {
        let workers = vec![Worker::new("E1").with_capabilities(["A", "B", "A"])];
        let jobs = vec![Job::new("T1", "A")];
        let g = CompatibilityGraph::build(&workers, &jobs);
        assert_eq!(g.workers_of(0), &[0]);
        assert_eq!(g.worker_degree(0), 1);
    }

    #[test]
    fn test_empty_sides() {
        let workers = vec![Worker::new("E1").with_capability("A")];
        let jobs = vec![Job::new("T1", "A")];

        let no_jobs = CompatibilityGraph::build(&workers, &[]);
        assert_eq!(no_jobs.job_count(), 0);
        assert!(no_jobs.is_degenerate());

        let no_workers = CompatibilityGraph::build(&[], &jobs);
        assert_eq!(no_workers.job_count(), 1);
        assert!(no_workers.workers_of(0).is_empty());
        assert!(no_workers.is_degenerate());
    }

    #[test]
    fn test_reordered_view() {
        let (workers, jobs) = scenario();
        let g = CompatibilityGraph::build(workers.iter().rev(), jobs.iter());
        assert_eq!(g.worker_id(0), "E3");
        assert_eq!(g.workers_of(0), &[0, 2]); // E3, E1
    }

    #[test]
    fn test_display_lists_linkages() {
        let (workers, jobs) = scenario();
        let g = CompatibilityGraph::build(&workers, &jobs);
        let text = g.to_string();
        assert!(text.contains("job T1 [A] -> E1 E3"));
        assert!(text.contains("worker E3 -> T1 T2"));
        assert!(text.contains("worker E2 -> T2"));
    }
}
