//! Drug API trait and error definitions
//!
//! This module defines the core `DrugApi` trait that all client
//! implementations must satisfy, the `SearchType` discriminant for the
//! search endpoint, and the typed `ApiError` surfaced to callers.

use crate::types::{Drug, DrugSummary};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to the PharmaDB API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The API answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The request never produced a usable response (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected record shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured API base URL is not a valid URL.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Whether a retry of the same request can plausibly succeed.
    ///
    /// Transport failures and server-side errors are retryable;
    /// client errors and decode failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Discriminant for the drug search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Search by marketed brand name.
    BrandName,
    /// Search by active ingredient.
    ActiveIngredient,
    /// Search by FDA application number.
    ApplicationNumber,
}

impl SearchType {
    /// Wire value for the `searchType` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::BrandName => "brand_name",
            SearchType::ActiveIngredient => "active_ingredient",
            SearchType::ApplicationNumber => "application_number",
        }
    }
}

/// PharmaDB API client trait
///
/// Both operations are read-only, idempotent, and stateless between
/// calls. Implementations must be `Send + Sync` so they can be shared
/// across async tasks.
#[async_trait]
pub trait DrugApi: Send + Sync {
    /// Search for drugs matching a free-text query.
    ///
    /// # Arguments
    ///
    /// * `search_query` - Free-text query string
    /// * `search_type` - Which field the query is matched against
    ///
    /// # Returns
    ///
    /// A list of drug summaries, or an error once the bounded retry
    /// budget is exhausted.
    async fn find_drug(
        &self,
        search_query: &str,
        search_type: SearchType,
    ) -> Result<Vec<DrugSummary>, ApiError>;

    /// Fetch one drug's full record by FDA application number.
    ///
    /// The record includes labels, patents and images; current-label and
    /// SPL-history metadata are excluded by default.
    async fn drug_by_application_number(&self, application_number: &str)
        -> Result<Drug, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_type_wire_values() {
        assert_eq!(SearchType::BrandName.as_str(), "brand_name");
        assert_eq!(SearchType::ActiveIngredient.as_str(), "active_ingredient");
        assert_eq!(SearchType::ApplicationNumber.as_str(), "application_number");
    }

    #[test]
    fn test_retryable_errors() {
        assert!(ApiError::Status {
            status: 503,
            url: "https://api.pharmadb.org/drugs".into()
        }
        .is_retryable());

        assert!(!ApiError::Status {
            status: 400,
            url: "https://api.pharmadb.org/drugs".into()
        }
        .is_retryable());

        assert!(!ApiError::NotFound("NDA000000".into()).is_retryable());
    }
}
