//! User interactions dispatched to the view controller.
//!
//! The orchestrating application is responsible for mapping its input
//! events (clicks, key presses, route changes) to `ViewAction` variants.

/// A user interaction with the drug view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Select a label revision by its index in the drug's label list.
    ///
    /// The first selection fills the first slot, the second fills the
    /// second slot (triggering the diff). Selecting with both slots
    /// already full starts a fresh selection with this label.
    SelectLabel(usize),

    /// Clear both label slots and any computed diff.
    ClearLabels,

    /// Open a patent claim overlay, identified by patent and claim number.
    SelectPatentClaim {
        patent_number: String,
        claim_number: u32,
    },

    /// Close the patent claim overlay, keeping the label selection.
    ClosePatentView,
}
