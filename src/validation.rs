//! Input validation for assignment snapshots.
//!
//! Checks structural integrity of workers and jobs before the
//! compatibility graph is built. Detects:
//! - Empty or whitespace-only identifiers (workers, jobs, capabilities)
//! - Duplicate worker IDs and duplicate job IDs
//! - Repeated capabilities on one worker (strict mode only)
//!
//! A job whose capability no worker holds is *not* an input error; it
//! simply stays unmatched.

use crate::models::{Job, Worker};
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two workers or two jobs share the same ID.
    DuplicateId,
    /// An identifier is empty or whitespace only.
    MalformedId,
    /// A worker lists the same capability more than once.
    DuplicateCapability,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn is_malformed(id: &str) -> bool {
    id.trim().is_empty()
}

/// Validates a worker/job snapshot.
///
/// Checks:
/// 1. Every worker ID, job ID and capability ID is non-blank
/// 2. No duplicate worker IDs
/// 3. No duplicate job IDs
/// 4. With `strict`, no worker repeats a capability
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(workers: &[Worker], jobs: &[Job], strict: bool) -> ValidationResult {
    let mut errors = Vec::new();

    let mut worker_ids = HashSet::with_capacity(workers.len());
    for (pos, w) in workers.iter().enumerate() {
        if is_malformed(&w.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedId,
                format!("Worker at position {pos} has a blank ID"),
            ));
        } else if !worker_ids.insert(w.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID: {}", w.id),
            ));
        }

        let mut seen = HashSet::with_capacity(w.capabilities.len());
        for cap in &w.capabilities {
            if is_malformed(cap) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedId,
                    format!("Worker '{}' lists a blank capability", w.id),
                ));
            } else if !seen.insert(cap.as_str()) && strict {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateCapability,
                    format!("Worker '{}' lists capability '{cap}' more than once", w.id),
                ));
            }
        }
    }

    let mut job_ids = HashSet::with_capacity(jobs.len());
    for (pos, j) in jobs.iter().enumerate() {
        if is_malformed(&j.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedId,
                format!("Job at position {pos} has a blank ID"),
            ));
        } else if !job_ids.insert(j.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", j.id),
            ));
        }

        if is_malformed(&j.required_capability) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedId,
                format!("Job '{}' requires a blank capability", j.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_workers() -> Vec<Worker> {
        vec![
            Worker::new("E1").with_capability("A"),
            Worker::new("E2").with_capabilities(["A", "B"]),
        ]
    }

    fn sample_jobs() -> Vec<Job> {
        vec![Job::new("T1", "A"), Job::new("T2", "C")]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_workers(), &sample_jobs(), true).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_input(&[], &[], true).is_ok());
    }

    #[test]
    fn test_duplicate_worker_id() {
        let workers = vec![Worker::new("E1"), Worker::new("E1")];
        let errors = validate_input(&workers, &[], false).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("worker")));
    }

    #[test]
    fn test_duplicate_job_id() {
        let jobs = vec![Job::new("T1", "A"), Job::new("T1", "B")];
        let errors = validate_input(&[], &jobs, false).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("job"));
    }

    #[test]
    fn test_blank_ids() {
        let workers = vec![Worker::new("  ").with_capability("A")];
        let jobs = vec![Job::new("", "A"), Job::new("T2", "\t")];
        let errors = validate_input(&workers, &jobs, false).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::MalformedId));
    }

    #[test]
    fn test_blank_capability() {
        let workers = vec![Worker::new("E1").with_capability("")];
        let errors = validate_input(&workers, &[], false).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::MalformedId);
    }

    #[test]
    fn test_duplicate_capability_strict_only() {
        let workers = vec![Worker::new("E1").with_capabilities(["A", "A"])];
        assert!(validate_input(&workers, &[], false).is_ok());

        let errors = validate_input(&workers, &[], true).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateCapability);
    }

    #[test]
    fn test_multiple_errors() {
        let workers = vec![Worker::new("E1"), Worker::new("E1"), Worker::new("")];
        let jobs = vec![Job::new("T1", "A"), Job::new("T1", "A")];
        let errors = validate_input(&workers, &jobs, false).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
