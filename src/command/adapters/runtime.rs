//! Job dispatcher that runs jobs as detached tokio tasks.

use crate::command::{
    domain::GenerationJob,
    ports::{Dispatched, ImageGenerator, JobDispatcher, Publisher},
    services::GenerationJobRunner,
};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::runtime::Handle;
use tokio::sync::Notify;

/// Spawns one detached task per dispatched job.
///
/// Tasks outlive the request that dispatched them and are never cancelled.
/// The dispatcher counts tasks in flight so a host can drain them at
/// shutdown with [`TokioJobDispatcher::wait_idle`]. There is no concurrency
/// cap.
pub struct TokioJobDispatcher<G, P, C>
where
    G: ImageGenerator,
    P: Publisher,
    C: Clock + Send + Sync,
{
    runner: Arc<GenerationJobRunner<G, P, C>>,
    runtime: Handle,
    tracker: Arc<InFlight>,
}

#[derive(Debug, Default)]
struct InFlight {
    count: AtomicUsize,
    idle: Notify,
}

struct InFlightGuard(Arc<InFlight>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.0.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

impl<G, P, C> TokioJobDispatcher<G, P, C>
where
    G: ImageGenerator,
    P: Publisher,
    C: Clock + Send + Sync,
{
    /// Creates a dispatcher spawning onto `runtime`.
    #[must_use]
    pub fn new(runner: Arc<GenerationJobRunner<G, P, C>>, runtime: Handle) -> Self {
        Self {
            runner,
            runtime,
            tracker: Arc::new(InFlight::default()),
        }
    }

    /// Returns the number of jobs that have not finished yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tracker.count.load(Ordering::SeqCst)
    }

    /// Waits until every dispatched job has finished.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.tracker.idle.notified();
            if self.tracker.count.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl<G, P, C> JobDispatcher for TokioJobDispatcher<G, P, C>
where
    G: ImageGenerator + 'static,
    P: Publisher + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn dispatch(&self, job: GenerationJob) -> Dispatched {
        let receipt = Dispatched { job_id: job.id() };
        self.tracker.count.fetch_add(1, Ordering::SeqCst);
        let guard = InFlightGuard(Arc::clone(&self.tracker));
        let runner = Arc::clone(&self.runner);

        // Detached: the join handle is dropped and the task runs on its own.
        drop(self.runtime.spawn(async move {
            let _in_flight = guard;
            let report = runner.run(job).await;
            tracing::debug!(
                job_id = %report.job_id(),
                state = report.state().as_str(),
                "Generation job finished"
            );
        }));
        receipt
    }
}
