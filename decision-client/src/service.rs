use async_trait::async_trait;
use tracing::debug;

use crate::error::TransportError;
use crate::models::{IngestRequest, QueryRequest, QueryResult};

/// Base endpoint of the remote decision service.
///
/// The value is injected explicitly; the client never reads ambient
/// environment state.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl ServiceConfig {
    /// Trailing slashes are stripped, so `base_url` is stored without one
    /// and endpoint paths can always be appended as `/api/...`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

/// Transport seam to the ingestion/query backend
#[async_trait]
pub trait DecisionService: Send + Sync {
    async fn ingest(&self, request: &IngestRequest) -> Result<(), TransportError>;
    async fn query(&self, request: &QueryRequest) -> Result<QueryResult, TransportError>;
}

/// HTTP implementation of [`DecisionService`].
///
/// No retry and no timeout are configured; a hung request stays pending
/// until a newer submission supersedes it.
pub struct HttpDecisionService {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl HttpDecisionService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

#[async_trait]
impl DecisionService for HttpDecisionService {
    async fn ingest(&self, request: &IngestRequest) -> Result<(), TransportError> {
        let url = self.endpoint("/api/ingest");
        debug!(url = %url, urls = request.urls.len(), "sending ingest request");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        // Success body is unspecified and ignored, only the status matters
        Ok(())
    }

    async fn query(&self, request: &QueryRequest) -> Result<QueryResult, TransportError> {
        let url = self.endpoint("/api/query");
        debug!(url = %url, query_length = request.query.len(), "sending query request");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| TransportError::Shape(e.to_string()))
    }
}
