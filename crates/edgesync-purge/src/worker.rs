//! Queue-job adapter for the invalidation operation.
//!
//! The worker contract requires callbacks to always return a normalized
//! outcome record and never let a failure cross the worker boundary, so
//! this is the one place in the crate that catches errors instead of
//! propagating them.

use std::sync::Arc;

use serde_json::json;

use edgesync_core::{
    HttpTransport, JobHandler, JobOutcome, JobWorker, PurgeRequest, RequestSigner,
};

use crate::client::InvalidationClient;
use crate::error::PurgeError;

/// Register the invalidation operation as a job callback named
/// `job_name` on `worker`.
///
/// The callback expects a payload of the [`PurgeRequest`] shape:
/// `{"urls": [...], "network": "production"|"staging"}` with `network`
/// optional. On success the outcome context echoes the receipt plus the
/// original URL list for audit; on failure it carries the error's
/// classification, message and originating location.
pub fn attach_to_worker<T, S>(
    worker: &mut dyn JobWorker,
    job_name: &str,
    client: Arc<InvalidationClient<T, S>>,
) where
    T: HttpTransport + 'static,
    S: RequestSigner + 'static,
{
    let handler: JobHandler = Box::new(move |payload| {
        let client = Arc::clone(&client);
        Box::pin(async move {
            let request = match serde_json::from_value::<PurgeRequest>(payload) {
                Ok(request) => request,
                Err(e) => {
                    let err = PurgeError::Payload {
                        message: e.to_string(),
                    };
                    return failure_outcome(&err);
                }
            };

            match client.invalidate(&request.urls, request.network).await {
                Ok(receipt) => JobOutcome::succeeded(json!({
                    "urls": request.urls,
                    "network": request.network,
                    "purgeId": receipt.purge_id,
                    "supportId": receipt.support_id,
                    "estimatedSeconds": receipt.estimated_seconds,
                    "httpStatus": receipt.http_status,
                    "detail": receipt.detail,
                })),
                Err(e) => failure_outcome(&e),
            }
        })
    });

    worker.register_callback(job_name, handler);
}

/// Convert a purge failure into the normalized outcome record.
fn failure_outcome(err: &PurgeError) -> JobOutcome {
    JobOutcome::failed(json!({
        "kind": err.kind(),
        "message": err.to_string(),
        "source": format!("{}::invalidate", module_path!()),
    }))
}
