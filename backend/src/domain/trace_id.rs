//! Correlation identifier for one HTTP request.
//!
//! The [`Trace`](crate::Trace) middleware opens a scope per request; anything
//! awaited inside it can read the identifier back, which is how
//! [`Error`](crate::domain::Error) stamps `trace_id` onto error bodies without
//! handlers passing it around. The value lives in a Tokio task-local, so a
//! spawned task sees nothing unless it is wrapped in [`TraceId::scope`] again.

use std::fmt;
use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static ACTIVE: TraceId;
}

/// Random UUID naming a request in logs, error bodies and the `trace-id`
/// response header.
///
/// ```
/// use sleepease::TraceId;
///
/// async fn log_request() {
///     match TraceId::current() {
///         Some(id) => tracing::info!(trace_id = %id, "sleep entry received"),
///         None => tracing::info!("sleep entry received outside a request"),
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh v4 identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the enclosing request, `None` outside any scope.
    #[must_use]
    pub fn current() -> Option<Self> {
        ACTIVE.try_with(|id| *id).ok()
    }

    /// Drive `fut` with `trace_id` readable through [`TraceId::current`].
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        ACTIVE.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}
