//! Hopcroft–Karp maximum-cardinality bipartite matching.
//!
//! # Algorithm
//!
//! Each phase:
//! 1. **Layering (BFS)**: all free jobs start at distance 0. From a job,
//!    any edge reaches a worker; from a matched worker, only its matching
//!    edge leads on to a job. The distance at which a *free* worker is
//!    first reached is the length of the shortest augmenting path. If no
//!    free worker is reachable the matching is maximum.
//! 2. **Augmentation (DFS)**: from every free job, search for a path that
//!    climbs the layers one step at a time and ends at a free worker at
//!    the shortest-path distance. A found path is flipped, growing the
//!    matching by one. Jobs whose search fails are dropped from the
//!    layering for the rest of the phase.
//!
//! The DFS keeps its own stack, so the depth of an augmenting path is
//! bounded by heap memory, not by the thread's call stack.
//!
//! # Complexity
//! O(E·√V): at most O(√V) phases, each linear in the edge count.
//!
//! # Reference
//! Hopcroft & Karp (1973), "An n^5/2 Algorithm for Maximum Matchings
//! in Bipartite Graphs", SIAM J. Computing 2(4)

use std::collections::VecDeque;

use crate::graph::CompatibilityGraph;
use crate::models::{Matching, MatchingStats, Pair};

const INF: usize = usize::MAX;

/// Solver state for one run over one graph.
///
/// # Example
///
/// ```
/// use u_assign::graph::CompatibilityGraph;
/// use u_assign::matching::HopcroftKarp;
/// use u_assign::models::{Job, Worker};
///
/// let workers = vec![
///     Worker::new("E1").with_capability("A"),
///     Worker::new("E2").with_capability("B"),
///     Worker::new("E3").with_capabilities(["A", "B"]),
/// ];
/// let jobs = vec![Job::new("T1", "A"), Job::new("T2", "B")];
///
/// let graph = CompatibilityGraph::build(&workers, &jobs);
/// let matching = HopcroftKarp::new(&graph).solve();
/// assert_eq!(matching.len(), 2);
/// ```
#[derive(Debug)]
pub struct HopcroftKarp<'g> {
    graph: &'g CompatibilityGraph,
    /// Worker matched to each job.
    job_mate: Vec<Option<usize>>,
    /// Job matched to each worker.
    worker_mate: Vec<Option<usize>>,
    /// BFS layer of each job; `INF` when unreached or pruned.
    dist: Vec<usize>,
    /// Layer at which a free worker is reached (the "null" vertex).
    dist_free: usize,
    queue: VecDeque<usize>,
    /// DFS frames: (job, index of the next edge to try).
    stack: Vec<(usize, usize)>,
    size: usize,
}

impl<'g> HopcroftKarp<'g> {
    /// Prepares an empty matching over `graph`.
    pub fn new(graph: &'g CompatibilityGraph) -> Self {
        Self {
            graph,
            job_mate: vec![None; graph.job_count()],
            worker_mate: vec![None; graph.worker_count()],
            dist: vec![INF; graph.job_count()],
            dist_free: INF,
            queue: VecDeque::with_capacity(graph.job_count()),
            stack: Vec::new(),
            size: 0,
        }
    }

    /// Runs phases until no augmenting path remains.
    pub fn solve(mut self) -> Matching {
        let mut stats = MatchingStats::default();

        if !self.graph.is_degenerate() {
            while self.layer() {
                let augmented = self.augment_all();
                stats.phases += 1;
                stats.augmentations_per_phase.push(augmented);
                tracing::debug!(
                    phase = stats.phases,
                    augmented,
                    size = self.size,
                    "hopcroft-karp phase complete"
                );
                debug_assert!(augmented > 0, "layering found a path that no DFS reached");
                debug_assert!(self.is_consistent(), "matching lost injectivity");
            }
        }

        self.into_matching(stats)
    }

    /// BFS layering. Returns whether a free worker is reachable.
    fn layer(&mut self) -> bool {
        self.queue.clear();
        for j in 0..self.graph.job_count() {
            if self.job_mate[j].is_none() {
                self.dist[j] = 0;
                self.queue.push_back(j);
            } else {
                self.dist[j] = INF;
            }
        }
        self.dist_free = INF;

        while let Some(j) = self.queue.pop_front() {
            // Past the shortest augmenting length nothing useful remains.
            if self.dist[j] >= self.dist_free {
                continue;
            }
            let next = self.dist[j] + 1;
            for &w in self.graph.workers_of(j) {
                match self.worker_mate[w] {
                    None => {
                        if self.dist_free == INF {
                            self.dist_free = next;
                        }
                    }
                    Some(mate) => {
                        if self.dist[mate] == INF {
                            self.dist[mate] = next;
                            self.queue.push_back(mate);
                        }
                    }
                }
            }
        }

        self.dist_free != INF
    }

    /// DFS from every free job in job order. Returns paths applied.
    fn augment_all(&mut self) -> usize {
        let mut augmented = 0;
        for j in 0..self.graph.job_count() {
            if self.job_mate[j].is_none() && self.augment_from(j) {
                augmented += 1;
            }
        }
        self.size += augmented;
        augmented
    }

    /// Iterative layered DFS from a free job.
    ///
    /// Each stack frame remembers which edge it will try next; the edge
    /// just before the cursor is the one the frame above was reached
    /// through, which is what gets flipped on success.
    fn augment_from(&mut self, root: usize) -> bool {
        if self.dist[root] != 0 {
            return false;
        }

        let graph = self.graph;
        self.stack.clear();
        self.stack.push((root, 0));

        while let Some(&(j, cursor)) = self.stack.last() {
            let adj = graph.workers_of(j);
            if cursor == adj.len() {
                // Dead end: no augmenting path through `j` this phase.
                self.dist[j] = INF;
                self.stack.pop();
                continue;
            }

            let w = adj[cursor];
            let top = self.stack.len() - 1;
            self.stack[top].1 += 1;
            let next = self.dist[j] + 1;

            match self.worker_mate[w] {
                None if next == self.dist_free => {
                    self.flip_stack();
                    return true;
                }
                None => {}
                Some(mate) if self.dist[mate] == next => {
                    self.stack.push((mate, 0));
                }
                Some(_) => {}
            }
        }

        false
    }

    /// Flips matched/unmatched status along the path held on the stack.
    fn flip_stack(&mut self) {
        let graph = self.graph;
        for &(j, cursor) in &self.stack {
            let w = graph.workers_of(j)[cursor - 1];
            self.job_mate[j] = Some(w);
            self.worker_mate[w] = Some(j);
        }
        self.stack.clear();
    }

    /// Whether `job_mate` and `worker_mate` mirror each other.
    fn is_consistent(&self) -> bool {
        let matched_jobs = self.job_mate.iter().flatten().count();
        let matched_workers = self.worker_mate.iter().flatten().count();
        matched_jobs == self.size
            && matched_workers == self.size
            && self
                .job_mate
                .iter()
                .enumerate()
                .all(|(j, w)| w.map_or(true, |w| self.worker_mate[w] == Some(j)))
    }

    fn into_matching(self, stats: MatchingStats) -> Matching {
        let graph = self.graph;
        let pairs = self
            .job_mate
            .iter()
            .enumerate()
            .filter_map(|(j, w)| {
                w.map(|w| Pair::new(graph.job_id(j), graph.worker_id(w)))
            })
            .collect();
        Matching::from_pairs(pairs, stats)
    }
}
