//! PharmaDB API data transfer objects
//!
//! These types represent the records returned from the PharmaDB API.
//! Deserializing into them at the gateway boundary is what validates
//! the payload; anything that does not fit surfaces as a decode error
//! instead of an untyped blob drifting through the application.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One drug's full record: its FDA application plus every label
/// revision and patent the API knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drug {
    /// FDA application number (e.g., "NDA020702")
    #[serde(rename = "applicationNumber", default)]
    pub application_number: String,

    /// Label revisions, in the API's (chronological) order
    #[serde(rename = "drugLabels", default)]
    pub labels: Vec<Label>,

    /// Associated patents, in the API's order
    #[serde(rename = "drugPatents", default)]
    pub patents: Vec<Patent>,
}

/// One versioned package-insert document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Date this revision was published
    pub published_date: NaiveDate,

    /// Application numbers this label applies to
    #[serde(default)]
    pub application_numbers: Vec<String>,

    /// Named sections making up the document
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A named section of a label with its text body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section name (e.g., "Indications and Usage")
    pub name: String,

    /// Full text body of the section
    pub text: String,

    /// Patent-claim relevance scores for this section, if computed
    #[serde(default)]
    pub scores: Vec<ClaimScore>,
}

/// Relevance of one patent claim to one label section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimScore {
    /// Patent the claim belongs to
    pub patent_number: String,

    /// Claim number within the patent
    pub claim_number: u32,

    /// Relevance score in [0, 1]
    pub score: f64,
}

/// A patent associated with a drug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patent {
    /// Patent number (e.g., "6087380")
    pub patent_number: String,

    /// Date the patent was published
    pub published_date: NaiveDate,

    /// Claims made by the patent
    #[serde(default)]
    pub claims: Vec<Claim>,
}

/// A single numbered claim within a patent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim number within the patent
    pub claim_number: u32,

    /// Full claim text
    #[serde(default)]
    pub claim_text: String,
}

/// A search-result row from the drug search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugSummary {
    /// FDA application number
    pub application_number: String,

    /// Marketed brand name, when known
    #[serde(default)]
    pub brand_name: Option<String>,

    /// Generic (non-proprietary) name, when known
    #[serde(default)]
    pub generic_name: Option<String>,
}
