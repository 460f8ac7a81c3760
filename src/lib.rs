//! Skill-constrained worker assignment for the U-Engine ecosystem.
//!
//! Assigns idle workers to pending jobs so that every worker takes a job
//! it has the capability for and as many jobs as possible are covered.
//! The problem is maximum-cardinality bipartite matching; this crate
//! solves it with Hopcroft–Karp.
//!
//! # Modules
//!
//! - **`models`**: Domain types - `Worker`, `Job`, `Matching`, `Pair`
//! - **`validation`**: Snapshot integrity checks (blank IDs, duplicates)
//! - **`graph`**: `CompatibilityGraph` - capability-indexed bipartite graph
//! - **`matching`**: `HopcroftKarp` - the maximum matching solver
//! - **`matcher`**: `Matcher`, `MatcherConfig` - one-call entry point
//! - **`kpi`**: `AssignmentKpi` - coverage and utilization metrics
//! - **`pool`**: `WorkPool`, `AssignmentSink` - applying a matching to records
//!
//! # Example
//!
//! ```
//! use u_assign::assign;
//! use u_assign::models::{Job, Worker};
//!
//! let workers = vec![
//!     Worker::new("alice").with_capabilities(["rust", "sql"]),
//!     Worker::new("bob").with_capability("rust"),
//! ];
//! let jobs = vec![Job::new("migrate-db", "sql"), Job::new("fix-parser", "rust")];
//!
//! let matching = assign(&workers, &jobs).unwrap();
//! assert_eq!(matching.worker_for("migrate-db"), Some("alice"));
//! assert_eq!(matching.worker_for("fix-parser"), Some("bob"));
//! ```
//!
//! # Architecture
//!
//! The core (`graph`, `matching`) is pure and synchronous: it reads an
//! immutable snapshot and returns a new matching. Persisting the result
//! and serializing cycles per pool is the caller's job; `pool` shows one
//! way to do it in memory.
//!
//! # References
//!
//! - Hopcroft & Karp (1973), "An n^5/2 Algorithm for Maximum Matchings
//!   in Bipartite Graphs"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 26.3

pub mod error;
pub mod graph;
pub mod kpi;
pub mod matcher;
pub mod matching;
pub mod models;
pub mod pool;
pub mod validation;

pub use error::AssignError;
pub use matcher::{assign, Matcher, MatcherConfig, OrderPolicy};
