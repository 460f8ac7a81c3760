//! Job model.

use serde::{Deserialize, Serialize};

/// A pending unit of work.
///
/// Requires exactly one capability. Any worker holding that capability
/// is compatible with the job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Capability a worker must hold to take this job.
    pub required_capability: String,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, required_capability: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            required_capability: required_capability.into(),
        }
    }
}
