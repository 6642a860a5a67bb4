//! Input normalization plus the validation gate in front of the transport.

use crate::error::ValidationError;
use crate::models::{IngestRequest, QueryRequest};

/// Split a raw comma-separated URL string into trimmed segments.
///
/// Splits strictly on `,`; each piece keeps its original position, duplicates
/// included, with leading/trailing whitespace removed. Empty segments are
/// kept here; dropping them is the job of [`IngestRequest::parse`].
pub fn normalize_urls(raw: &str) -> Vec<String> {
    raw.split(',').map(|part| part.trim().to_string()).collect()
}

/// The query text is forwarded exactly as typed.
pub fn normalize_query(raw: &str) -> String {
    raw.to_string()
}

impl IngestRequest {
    /// Normalize and validate a raw comma-separated URL string.
    ///
    /// Empty segments left over after trimming are dropped; if nothing
    /// remains the input is rejected and no request should be sent.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let urls: Vec<String> = normalize_urls(raw)
            .into_iter()
            .filter(|url| !url.is_empty())
            .collect();
        if urls.is_empty() {
            return Err(ValidationError::NoUrls);
        }
        Ok(Self { urls })
    }
}

impl QueryRequest {
    /// Validate a raw question. Blank input is rejected; accepted input is
    /// forwarded byte-for-byte (no trimming of the stored text).
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(Self {
            query: normalize_query(raw),
        })
    }
}
