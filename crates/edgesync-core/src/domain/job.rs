//! Normalized outcome record for queue-job callbacks.

use serde::Serialize;

/// What a job callback hands back to the worker.
///
/// The worker contract requires callbacks to always return an outcome
/// record and never propagate a failure past the worker boundary, so
/// both success and failure are expressed through this one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobOutcome {
    /// Whether the job completed successfully.
    pub success: bool,
    /// Structured context for later inspection: on success an audit
    /// echo of the response plus original inputs, on failure the error
    /// classification, message and originating operation.
    pub context: serde_json::Value,
}

impl JobOutcome {
    /// A successful outcome with the given audit context.
    #[must_use]
    pub const fn succeeded(context: serde_json::Value) -> Self {
        Self {
            success: true,
            context,
        }
    }

    /// A failed outcome with the given diagnostic context.
    #[must_use]
    pub const fn failed(context: serde_json::Value) -> Self {
        Self {
            success: false,
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constructors_set_the_success_flag() {
        let ok = JobOutcome::succeeded(json!({"purgeId": "abc"}));
        assert!(ok.success);
        assert_eq!(ok.context["purgeId"], "abc");

        let failed = JobOutcome::failed(json!({"kind": "rejected"}));
        assert!(!failed.success);
        assert_eq!(failed.context["kind"], "rejected");
    }
}
