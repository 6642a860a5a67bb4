//! Request lifecycle coordinator.
//!
//! Tracks exactly one operation at a time: `Idle` → `Pending` → settled as
//! `Succeeded` or `Failed`, with any state able to re-enter `Pending` on a
//! new submission. Every submission takes a monotonically increasing ticket;
//! a settlement is applied only if its ticket is still the latest issued, so
//! a stale response can never overwrite fresher state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::models::{IngestRequest, QueryRequest, QueryResult};
use crate::service::DecisionService;

/// Fixed user-facing message for any ingestion failure.
pub const INGEST_FAILED_MESSAGE: &str = "Failed to ingest documents.";
/// Fixed user-facing message for any query failure.
pub const QUERY_FAILED_MESSAGE: &str = "Failed to get a response from the agent.";

/// Which of the two operations a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Ingest,
    Query,
}

/// A settled failure.
///
/// `detail` carries the underlying cause for diagnostics; only the fixed
/// message derived from `kind` is ever shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub kind: OperationKind,
    pub detail: String,
}

impl Failure {
    pub fn message(&self) -> &'static str {
        match self.kind {
            OperationKind::Ingest => INGEST_FAILED_MESSAGE,
            OperationKind::Query => QUERY_FAILED_MESSAGE,
        }
    }
}

/// Lifecycle of the single tracked operation
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OperationState {
    #[default]
    Idle,
    Pending,
    Succeeded(QueryResult),
    Failed(Failure),
}

/// How a submission ended, from the submitter's point of view
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// Ingest completed; the state is back to `Idle` and the acknowledgment
    /// is one-shot, carried here rather than in the state.
    Acknowledged,
    /// Query completed; the state holds the result.
    Answered,
    /// Validation or transport failure; the state holds the failure.
    Failed(Failure),
    /// A newer submission took over before this one settled; nothing was
    /// applied.
    Superseded,
}

/// Coordinates submissions against a [`DecisionService`].
///
/// Concurrency policy is cancel-and-replace by supersession: a new submit is
/// always accepted and re-enters `Pending`; an older in-flight call may run
/// to completion but its settlement is discarded.
pub struct RequestCoordinator<S> {
    service: S,
    state: Arc<RwLock<OperationState>>,
    latest: AtomicU64,
}

impl<S: DecisionService> RequestCoordinator<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: Arc::new(RwLock::new(OperationState::Idle)),
            latest: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current lifecycle state
    pub async fn state(&self) -> OperationState {
        self.state.read().await.clone()
    }

    /// Submit a raw comma-separated URL string for ingestion.
    pub async fn submit_ingest(&self, raw_urls: &str) -> Settlement {
        let ticket = self.begin().await;
        info!(ticket, "submitting ingest request");

        let request = match IngestRequest::parse(raw_urls) {
            Ok(request) => request,
            Err(e) => {
                error!(ticket, error = %e, "ingest input rejected");
                return self.fail(ticket, OperationKind::Ingest, e.to_string()).await;
            }
        };

        match self.service.ingest(&request).await {
            Ok(()) => {
                if self.settle(ticket, OperationState::Idle).await {
                    info!(ticket, urls = request.urls.len(), "documents ingested");
                    Settlement::Acknowledged
                } else {
                    Settlement::Superseded
                }
            }
            Err(e) => {
                error!(ticket, error = %e, "ingest request failed");
                self.fail(ticket, OperationKind::Ingest, e.to_string()).await
            }
        }
    }

    /// Submit a raw question for a decision.
    pub async fn submit_query(&self, raw_query: &str) -> Settlement {
        let ticket = self.begin().await;
        info!(ticket, "submitting query");

        let request = match QueryRequest::parse(raw_query) {
            Ok(request) => request,
            Err(e) => {
                error!(ticket, error = %e, "query input rejected");
                return self.fail(ticket, OperationKind::Query, e.to_string()).await;
            }
        };

        match self.service.query(&request).await {
            Ok(result) => {
                if self.settle(ticket, OperationState::Succeeded(result)).await {
                    info!(ticket, "query answered");
                    Settlement::Answered
                } else {
                    Settlement::Superseded
                }
            }
            Err(e) => {
                error!(ticket, error = %e, "query request failed");
                self.fail(ticket, OperationKind::Query, e.to_string()).await
            }
        }
    }

    /// Take a fresh ticket and enter `Pending`, discarding any prior
    /// result or error.
    ///
    /// Ticket allocation and the `Pending` write happen under one write
    /// lock. This keeps ticket order and state-write order identical: a
    /// submission that writes `Pending` later always holds a newer ticket,
    /// so an older submission can never overwrite a settled newer one.
    async fn begin(&self) -> u64 {
        let mut state = self.state.write().await;
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        *state = OperationState::Pending;
        ticket
    }

    /// Apply `next` only if `ticket` is still the latest issued.
    async fn settle(&self, ticket: u64, next: OperationState) -> bool {
        let mut state = self.state.write().await;
        // Checked under the write lock so a submit racing with this
        // settlement cannot be overwritten.
        if self.latest.load(Ordering::SeqCst) != ticket {
            info!(ticket, "discarding stale settlement");
            return false;
        }
        *state = next;
        true
    }

    async fn fail(&self, ticket: u64, kind: OperationKind, detail: String) -> Settlement {
        let failure = Failure { kind, detail };
        if self.settle(ticket, OperationState::Failed(failure.clone())).await {
            Settlement::Failed(failure)
        } else {
            Settlement::Superseded
        }
    }
}
