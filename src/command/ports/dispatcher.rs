//! Background job dispatch port.

use crate::command::domain::{GenerationJob, JobId};

/// Receipt for a job handed to a dispatcher.
///
/// A receipt says nothing about how the job will end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    /// Identifier of the dispatched job.
    pub job_id: JobId,
}

/// Hands generation jobs to a background executor.
#[cfg_attr(test, mockall::automock)]
pub trait JobDispatcher: Send + Sync {
    /// Schedules `job` and returns without waiting for it to run.
    ///
    /// Dispatch cannot fail; failures inside the job are the executor's to
    /// record.
    fn dispatch(&self, job: GenerationJob) -> Dispatched;
}
