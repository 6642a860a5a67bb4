use serde::{Deserialize, Serialize};

/// Request payload for the ingestion endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestRequest {
    pub urls: Vec<String>,
}

/// Request payload for the query endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Structured decision returned by the query endpoint.
///
/// `decision`, `justification` and `clauses_used` are required; a body
/// missing any of them fails to parse. `amount` may be `null` or absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResult {
    pub decision: String,
    pub amount: Option<f64>,
    pub justification: String,
    pub clauses_used: Vec<String>,
}
