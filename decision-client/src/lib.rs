pub mod coordinator;
pub mod error;
pub mod input;
pub mod models;
pub mod render;
pub mod service;

// Re-export commonly used types
pub use coordinator::{
    Failure, INGEST_FAILED_MESSAGE, OperationKind, OperationState, QUERY_FAILED_MESSAGE,
    RequestCoordinator, Settlement,
};
pub use error::{TransportError, ValidationError};
pub use input::{normalize_query, normalize_urls};
pub use models::{IngestRequest, QueryRequest, QueryResult};
pub use render::{DecisionView, ResponseView, format_amount, project};
pub use service::{DecisionService, HttpDecisionService, ServiceConfig};
