//! Request-scoped trace id.
//!
//! `TraceSpan` runs each request inside [`with_trace_id`]; error rendering
//! reads it back through [`trace_id`] so problem details and the
//! `x-trace-id` header agree with the request's log lines. Service code
//! never reads this directly.

use tokio::task_local;

/// Placeholder used when no request scope is active (startup, unit tests).
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// The current request's trace id, or [`UNKNOWN_TRACE_ID`].
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Drive `future` with `trace_id` visible to [`trace_id`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
