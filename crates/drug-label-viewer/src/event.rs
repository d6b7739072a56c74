//! Events emitted by the view controller for the rendering layer.

use crate::error::ViewError;

/// Something the rendering layer should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The label selection changed; `labels_selected` is 0, 1 or 2.
    SelectionChanged { labels_selected: usize },

    /// The label diff was recomputed with this many section entries.
    DiffRecomputed { section_count: usize },

    /// A patent claim overlay was opened.
    PatentOpened {
        patent_number: String,
        claim_number: u32,
    },

    /// The patent claim overlay was closed.
    PatentClosed,

    /// A lookup addressed by the interaction did not resolve.
    LookupFailed(ViewError),
}
