//! Queue-worker registration port.

use std::future::Future;
use std::pin::Pin;

use crate::domain::JobOutcome;

/// Boxed future returned by a job handler.
pub type JobFuture = Pin<Box<dyn Future<Output = JobOutcome> + Send>>;

/// A registered job callback.
///
/// Takes the raw job payload and always resolves to a [`JobOutcome`];
/// handlers must never propagate an error past the worker boundary.
pub type JobHandler = Box<dyn Fn(serde_json::Value) -> JobFuture + Send + Sync>;

/// A job-queue worker that operations can be registered into by name.
///
/// The worker reference is passed to whoever registers a callback;
/// there is no global registry.
pub trait JobWorker {
    /// Register `handler` to run jobs named `job_name`.
    fn register_callback(&mut self, job_name: &str, handler: JobHandler);
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingWorker;
    use super::*;
    use crate::domain::JobOutcome;

    #[test]
    fn recording_worker_stores_handlers_by_name() {
        let mut worker = RecordingWorker::new();
        let handler: JobHandler =
            Box::new(|_payload| Box::pin(async { JobOutcome::succeeded(serde_json::json!({})) }));
        worker.register_callback("invalidate", handler);

        assert!(worker.handler("invalidate").is_some());
        assert!(worker.handler("other").is_none());
    }
}
