//! Errors surfaced by the view controller.

use thiserror::Error;

/// Errors that can occur while handling a view transition.
///
/// Lookup misses are explicit values here, never panics: an unmatched
/// patent or claim identifier from the rendering layer must degrade to a
/// visible not-found outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewError {
    /// No patent with this number exists on the current drug.
    #[error("patent not found: {0}")]
    PatentNotFound(String),

    /// The patent exists but has no claim with this number.
    #[error("claim {claim_number} not found in patent {patent_number}")]
    ClaimNotFound {
        patent_number: String,
        claim_number: u32,
    },

    /// A label was selected by an index past the end of the label list.
    #[error("label index {0} out of range")]
    LabelOutOfRange(usize),
}
