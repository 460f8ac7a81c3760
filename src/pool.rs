//! In-memory work pool and assignment application.
//!
//! The matcher only computes pairs. Applying them (marking jobs assigned,
//! marking workers busy) belongs to whoever owns the records. This module
//! defines that seam, [`AssignmentSink`], and an in-memory [`WorkPool`]
//! implementing the full snapshot → match → apply cycle.
//!
//! # Concurrency
//!
//! Two cycles that read overlapping snapshots before either applies can
//! hand the same worker two jobs. [`WorkPool::run`] takes `&mut self`, so
//! cycles on one pool are serialized; a shared pool needs a lock around
//! the whole cycle (e.g. `Mutex<WorkPool>`). Even so, [`WorkPool`]
//! rejects pairs that no longer fit its current state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::AssignError;
use crate::matcher::Matcher;
use crate::models::{Job, Matching, Worker};

/// Receives matched pairs and records them.
pub trait AssignmentSink {
    /// Assigns `worker_id` to `job_id`.
    ///
    /// Implementations should reject pairs that are no longer applicable
    /// (stale snapshot) rather than overwrite existing assignments.
    fn apply_pair(&mut self, job_id: &str, worker_id: &str) -> Result<(), AssignError>;
}

/// Lifecycle state of a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    /// Waiting for a worker.
    #[default]
    Pending,
    /// Worker assigned, not started.
    Assigned,
    /// Being worked on.
    InProgress,
    /// Done.
    Completed,
}

/// A worker with its availability flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRecord {
    /// The worker.
    pub worker: Worker,
    /// Currently holding a job.
    pub busy: bool,
    /// Employed/enabled. Inactive workers are never matched.
    pub active: bool,
}

/// A job with its assignment state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// The job.
    pub job: Job,
    /// Lifecycle state.
    pub status: JobStatus,
    /// Assigned worker ID.
    pub assignee: Option<String>,
}

impl StaffRecord {
    /// An active, idle worker.
    pub fn new(worker: Worker) -> Self {
        Self {
            worker,
            busy: false,
            active: true,
        }
    }

    /// Whether the worker can be offered a job.
    pub fn is_available(&self) -> bool {
        self.active && !self.busy
    }
}

impl JobRecord {
    /// A pending, unassigned job.
    pub fn new(job: Job) -> Self {
        Self {
            job,
            status: JobStatus::Pending,
            assignee: None,
        }
    }

    /// Whether the job is waiting for a worker.
    pub fn is_assignable(&self) -> bool {
        self.status == JobStatus::Pending && self.assignee.is_none()
    }
}

/// Workers and jobs of one pool (e.g. one project's tasks and its
/// organization's staff).
#[derive(Debug, Clone, Default)]
pub struct WorkPool {
    staff: Vec<StaffRecord>,
    jobs: Vec<JobRecord>,
    staff_index: HashMap<String, usize>,
    job_index: HashMap<String, usize>,
}

impl WorkPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a worker record. A record with the same ID is replaced.
    pub fn add_staff(&mut self, record: StaffRecord) {
        match self.staff_index.get(&record.worker.id) {
            Some(&i) => self.staff[i] = record,
            None => {
                self.staff_index
                    .insert(record.worker.id.clone(), self.staff.len());
                self.staff.push(record);
            }
        }
    }

    /// Adds a job record. A record with the same ID is replaced.
    pub fn add_job(&mut self, record: JobRecord) {
        match self.job_index.get(&record.job.id) {
            Some(&i) => self.jobs[i] = record,
            None => {
                self.job_index.insert(record.job.id.clone(), self.jobs.len());
                self.jobs.push(record);
            }
        }
    }

    /// Adds an active, idle worker.
    pub fn with_worker(mut self, worker: Worker) -> Self {
        self.add_staff(StaffRecord::new(worker));
        self
    }

    /// Adds a pending job.
    pub fn with_job(mut self, job: Job) -> Self {
        self.add_job(JobRecord::new(job));
        self
    }

    /// Looks up a worker record.
    pub fn staff(&self, worker_id: &str) -> Option<&StaffRecord> {
        self.staff_index.get(worker_id).map(|&i| &self.staff[i])
    }

    /// Looks up a job record.
    pub fn job(&self, job_id: &str) -> Option<&JobRecord> {
        self.job_index.get(job_id).map(|&i| &self.jobs[i])
    }

    /// Mutable worker record, for external state changes.
    pub fn staff_mut(&mut self, worker_id: &str) -> Option<&mut StaffRecord> {
        self.staff_index
            .get(worker_id)
            .map(|&i| &mut self.staff[i])
    }

    /// Mutable job record, for external state changes.
    pub fn job_mut(&mut self, job_id: &str) -> Option<&mut JobRecord> {
        self.job_index.get(job_id).map(|&i| &mut self.jobs[i])
    }

    /// Eligible workers (active, idle) and jobs (pending, unassigned),
    /// in insertion order.
    pub fn snapshot(&self) -> (Vec<Worker>, Vec<Job>) {
        let workers = self
            .staff
            .iter()
            .filter(|s| s.is_available())
            .map(|s| s.worker.clone())
            .collect();
        let jobs = self
            .jobs
            .iter()
            .filter(|j| j.is_assignable())
            .map(|j| j.job.clone())
            .collect();
        (workers, jobs)
    }

    /// Runs one snapshot → match → apply cycle.
    ///
    /// Returns the applied matching. On an apply failure the pairs before
    /// the failing one remain applied.
    pub fn run(&mut self, matcher: &Matcher) -> Result<Matching, AssignError> {
        let (workers, jobs) = self.snapshot();
        let matching = matcher.solve(&workers, &jobs)?;
        let applied = matching.apply_to(self)?;
        tracing::info!(
            applied,
            eligible_workers = workers.len(),
            eligible_jobs = jobs.len(),
            "applied assignment matching"
        );
        Ok(matching)
    }

    /// Number of busy workers.
    pub fn busy_count(&self) -> usize {
        self.staff.iter().filter(|s| s.busy).count()
    }

    /// Number of pending, unassigned jobs.
    pub fn pending_count(&self) -> usize {
        self.jobs.iter().filter(|j| j.is_assignable()).count()
    }
}

impl AssignmentSink for WorkPool {
    fn apply_pair(&mut self, job_id: &str, worker_id: &str) -> Result<(), AssignError> {
        let &j = self
            .job_index
            .get(job_id)
            .ok_or_else(|| AssignError::UnknownJob(job_id.to_string()))?;
        let &w = self
            .staff_index
            .get(worker_id)
            .ok_or_else(|| AssignError::UnknownWorker(worker_id.to_string()))?;

        if !self.jobs[j].is_assignable() {
            return Err(AssignError::JobNotAssignable(job_id.to_string()));
        }
        if !self.staff[w].is_available() {
            return Err(AssignError::WorkerUnavailable(worker_id.to_string()));
        }

        let job = &mut self.jobs[j];
        job.status = JobStatus::Assigned;
        job.assignee = Some(worker_id.to_string());
        self.staff[w].busy = true;
        Ok(())
    }
}
