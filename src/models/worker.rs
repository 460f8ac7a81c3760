//! Worker model.
//!
//! A worker is anything that can take one unit of work at a time: an
//! employee, a machine, a driver. The only attribute the matcher cares
//! about is the set of capabilities (skills) the worker possesses.

use serde::{Deserialize, Serialize};

use super::Job;

/// A worker eligible for assignment.
///
/// Capabilities are opaque tags. Order is irrelevant to compatibility;
/// duplicates are tolerated by the graph builder unless strict
/// validation is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: String,
    /// Capability identifiers held by this worker.
    #[serde(default)]
    pub capabilities: Vec<String>,
}

impl Worker {
    /// Creates a worker with no capabilities.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            capabilities: Vec::new(),
        }
    }

    /// Adds a capability.
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }

    /// Adds several capabilities.
    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities.extend(capabilities.into_iter().map(Into::into));
        self
    }

    /// Whether this worker holds the given capability.
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }

    /// Whether this worker could take the given job.
    pub fn can_take(&self, job: &Job) -> bool {
        self.has_capability(&job.required_capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_builder() {
        let w = Worker::new("E1")
            .with_capability("welding")
            .with_capabilities(["milling", "drilling"]);

        assert_eq!(w.id, "E1");
        assert_eq!(w.capabilities, vec!["welding", "milling", "drilling"]);
        assert!(w.has_capability("milling"));
        assert!(!w.has_capability("painting"));
    }

    #[test]
    fn test_worker_can_take() {
        let w = Worker::new("E1").with_capability("A");
        assert!(w.can_take(&Job::new("T1", "A")));
        assert!(!w.can_take(&Job::new("T2", "B")));
    }

    #[test]
    fn test_worker_without_capabilities() {
        let w = Worker::new("idle");
        assert!(w.capabilities.is_empty());
        assert!(!w.has_capability(""));
    }

    #[test]
    fn test_worker_deserialize_missing_capabilities() {
        let w: Worker = serde_json::from_str(r#"{"id":"E9"}"#).unwrap();
        assert_eq!(w, Worker::new("E9"));
    }
}
