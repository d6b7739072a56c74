//! PharmaDB API client
//!
//! This crate provides a trait-based client for the PharmaDB REST API.
//! Responses are deserialized into explicit record types at this boundary,
//! so consumers never deal with untyped JSON blobs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 DrugApi trait                    │
//! │  - find_drug()                                   │
//! │  - drug_by_application_number()                  │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!             ┌─────────────────────┐
//!             │   HttpDrugClient    │
//!             │  (reqwest + retry)  │
//!             └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use pharmadb_client::{DrugApi, HttpDrugClient, SearchType};
//!
//! # async fn example() -> Result<(), pharmadb_client::ApiError> {
//! let client = HttpDrugClient::new(pharmadb_client::DEFAULT_API_URL)?;
//!
//! let hits = client.find_drug("lipitor", SearchType::BrandName).await?;
//! let drug = client.drug_by_application_number("NDA020702").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod http_client;
pub mod types;

/// Default PharmaDB API endpoint
pub const DEFAULT_API_URL: &str = "https://api.pharmadb.org";

pub use client::{ApiError, DrugApi, SearchType};
pub use http_client::HttpDrugClient;
pub use types::{Claim, ClaimScore, Drug, DrugSummary, Label, Patent, Section};
