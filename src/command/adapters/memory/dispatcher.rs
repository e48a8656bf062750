//! Job dispatcher that records jobs instead of running them.

use crate::command::{
    domain::GenerationJob,
    ports::{Dispatched, JobDispatcher},
};
use std::sync::{Mutex, PoisonError};

/// Dispatcher that keeps every job it receives.
#[derive(Debug, Default)]
pub struct RecordingJobDispatcher {
    jobs: Mutex<Vec<GenerationJob>>,
}

impl RecordingJobDispatcher {
    /// Creates an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the jobs dispatched so far.
    #[must_use]
    pub fn jobs(&self) -> Vec<GenerationJob> {
        self.jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl JobDispatcher for RecordingJobDispatcher {
    fn dispatch(&self, job: GenerationJob) -> Dispatched {
        let receipt = Dispatched { job_id: job.id() };
        self.jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(job);
        receipt
    }
}
