//! Reqwest-based PharmaDB API client
//!
//! Direct implementation of the `DrugApi` trait over HTTP. Requests that
//! fail in a retryable way (transport faults, 5xx answers) are reissued
//! up to a fixed number of attempts before the error is propagated.

use crate::client::{ApiError, DrugApi, SearchType};
use crate::types::{Drug, DrugSummary};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Total attempts per request, including the first one.
const MAX_ATTEMPTS: u32 = 3;

/// Direct PharmaDB API client using reqwest
///
/// Stateless between calls; cloning is cheap (reqwest clients share
/// their connection pool).
#[derive(Debug, Clone)]
pub struct HttpDrugClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpDrugClient {
    /// Create a new client against the given API base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing reqwest instance.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        Ok(Self { http, base_url })
    }

    /// Build the URL for the drug search endpoint.
    fn search_url(&self, search_query: &str, search_type: SearchType) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join("drugs")
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?;
        url.query_pairs_mut()
            .append_pair("searchQuery", search_query)
            .append_pair("searchType", search_type.as_str());
        Ok(url)
    }

    /// Build the URL for one drug's full record.
    ///
    /// Labels, patents and images are requested; SPL history and the
    /// current SPL label are excluded by default. The application number
    /// is pushed as a single percent-encoded path segment, so an input
    /// containing `/` or `?` cannot rewrite the request.
    fn drug_url(&self, application_number: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("drugs")
            .push(application_number);
        url.query_pairs_mut()
            .append_pair("splHistory", "false")
            .append_pair("images", "true")
            .append_pair("currentSplLabel", "false")
            .append_pair("labels", "true")
            .append_pair("patents", "true");
        Ok(url)
    }

    /// Issue one GET and decode the body, without retrying.
    async fn try_get<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ApiError> {
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url.path().to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.json::<T>().await.map_err(|source| {
            if source.is_decode() {
                ApiError::Decode {
                    url: url.to_string(),
                    source,
                }
            } else {
                ApiError::Transport(source)
            }
        })
    }

    /// GET with the bounded automatic retry the gateway guarantees.
    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ApiError> {
        with_retry(url, || self.try_get(url)).await
    }
}

/// Run `request` up to [`MAX_ATTEMPTS`] times.
///
/// Retryable failures (transport faults, 5xx answers) are reissued;
/// anything else, or exhausting the attempt budget, propagates the last
/// error to the caller.
async fn with_retry<T, F, Fut>(url: &Url, mut request: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut attempt = 1;
    loop {
        match request().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < MAX_ATTEMPTS => {
                warn!(
                    "GET {} failed on attempt {}/{}: {}",
                    url, attempt, MAX_ATTEMPTS, err
                );
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[async_trait]
impl DrugApi for HttpDrugClient {
    async fn find_drug(
        &self,
        search_query: &str,
        search_type: SearchType,
    ) -> Result<Vec<DrugSummary>, ApiError> {
        debug!(
            "Searching drugs: query={:?} type={}",
            search_query,
            search_type.as_str()
        );

        let url = self.search_url(search_query, search_type)?;
        let hits: Vec<DrugSummary> = self.get_json(&url).await?;

        debug!("Search returned {} hits for {:?}", hits.len(), search_query);
        Ok(hits)
    }

    async fn drug_by_application_number(
        &self,
        application_number: &str,
    ) -> Result<Drug, ApiError> {
        debug!("Fetching drug record for {}", application_number);

        let url = self.drug_url(application_number)?;
        let drug: Drug = self.get_json(&url).await?;

        debug!(
            "Fetched {}: {} labels, {} patents",
            application_number,
            drug.labels.len(),
            drug.patents.len()
        );
        Ok(drug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpDrugClient {
        HttpDrugClient::new("https://api.pharmadb.org").unwrap()
    }

    #[test]
    fn test_search_url() {
        let url = client()
            .search_url("lipitor", SearchType::BrandName)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.pharmadb.org/drugs?searchQuery=lipitor&searchType=brand_name"
        );
    }

    #[test]
    fn test_search_url_escapes_query() {
        let url = client()
            .search_url("sodium chloride", SearchType::ActiveIngredient)
            .unwrap();
        assert!(url.as_str().contains("searchQuery=sodium+chloride"));
    }

    #[test]
    fn test_drug_url_includes_labels_and_patents() {
        let url = client().drug_url("NDA020702").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.pharmadb.org/drugs/NDA020702?splHistory=false&images=true&currentSplLabel=false&labels=true&patents=true"
        );
    }

    #[test]
    fn test_drug_url_escapes_the_application_number() {
        let url = client().drug_url("NDA/123?x").unwrap();
        assert!(url.path().ends_with("/drugs/NDA%2F123%3Fx"));
        // The injected '?' must not have started the query string.
        assert_eq!(
            url.query(),
            Some("splHistory=false&images=true&currentSplLabel=false&labels=true&patents=true")
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = HttpDrugClient::new("not a url");
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 503,
            url: "https://api.pharmadb.org/drugs".into(),
        }
    }

    #[tokio::test]
    async fn test_retry_recovers_from_transient_failures() {
        let url = Url::parse("https://api.pharmadb.org/drugs").unwrap();
        let mut calls = 0;

        let result: Result<u32, ApiError> = with_retry(&url, || {
            calls += 1;
            let attempt = calls;
            async move {
                if attempt < MAX_ATTEMPTS {
                    Err(server_error())
                } else {
                    Ok(42)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls, MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_retry_gives_up_after_max_attempts() {
        let url = Url::parse("https://api.pharmadb.org/drugs").unwrap();
        let mut calls = 0;

        let result: Result<u32, ApiError> = with_retry(&url, || {
            calls += 1;
            async { Err(server_error()) }
        })
        .await;

        assert!(matches!(result, Err(ApiError::Status { status: 503, .. })));
        assert_eq!(calls, MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_non_retryable_errors_are_not_reissued() {
        let url = Url::parse("https://api.pharmadb.org/drugs").unwrap();
        let mut calls = 0;

        let result: Result<u32, ApiError> = with_retry(&url, || {
            calls += 1;
            async { Err(ApiError::NotFound("/drugs/NDA000000".into())) }
        })
        .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert_eq!(calls, 1);
    }
}
