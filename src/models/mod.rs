//! Assignment domain models.
//!
//! Input snapshots (workers, jobs) and the solver output (matching).
//! Capabilities are plain string tags shared between workers and jobs.
//!
//! # Domain Mappings
//!
//! | u-assign | Project management | Healthcare | Logistics |
//! |----------|--------------------|------------|-----------|
//! | Worker | Employee | Nurse | Driver |
//! | Job | Task | Shift slot | Delivery |
//! | Capability | Skill | Certification | License class |
//! | Matching | Task allocation | Roster | Dispatch plan |

mod job;
mod matching;
mod worker;

pub use job::Job;
pub use matching::{Matching, MatchingStats, Pair};
pub use worker::Worker;
