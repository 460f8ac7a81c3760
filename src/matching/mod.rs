//! Maximum-cardinality matching over a compatibility graph.
//!
//! # Algorithm
//!
//! [`HopcroftKarp`] alternates a breadth-first layering pass with a
//! depth-first augmentation pass until no augmenting path remains. By
//! Berge's lemma a matching with no augmenting path is maximum.
//!
//! # Determinism
//!
//! Free jobs are tried in job order and each job's workers in worker
//! order. Identical, identically ordered snapshots yield identical
//! matchings.
//!
//! # References
//!
//! - Hopcroft & Karp (1973), SIAM J. Computing 2(4)
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 26.3

mod hopcroft_karp;

pub use hopcroft_karp::HopcroftKarp;
