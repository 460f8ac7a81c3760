//! Error types.
//!
//! Expected conditions (empty pools, jobs nobody can take) are not
//! errors; they produce an empty or partial matching. Errors are
//! reserved for input the matcher refuses to work on and for
//! assignments the pool refuses to apply.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure returned by the matcher and by assignment sinks.
#[derive(Debug, Error)]
pub enum AssignError {
    /// The worker/job snapshot failed validation. Carries every problem found.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Matcher configuration could not be parsed.
    #[error("failed to parse matcher config: {0}")]
    Config(#[from] serde_json::Error),

    /// A pair references a job the sink does not know.
    #[error("unknown job '{0}'")]
    UnknownJob(String),

    /// A pair references a worker the sink does not know.
    #[error("unknown worker '{0}'")]
    UnknownWorker(String),

    /// The job is no longer pending (already assigned or finished).
    #[error("job '{0}' is not pending")]
    JobNotAssignable(String),

    /// The worker is busy or inactive.
    #[error("worker '{0}' is not available")]
    WorkerUnavailable(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [] => "no details".to_string(),
        [only] => only.message.clone(),
        [first, rest @ ..] => format!("{} (and {} more)", first.message, rest.len()),
    }
}
