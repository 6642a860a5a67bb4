use thiserror::Error;

/// Failure at or below the HTTP layer.
///
/// A 2xx body that does not parse into the expected response shape is
/// reported here as well (`Shape`), so malformed responses follow the same
/// failure path as network and status errors instead of surfacing at render
/// time.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("service returned status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Shape(String),
}

/// Input rejected before reaching the transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no non-empty URL in input")]
    NoUrls,
    #[error("query is empty")]
    EmptyQuery,
}
