//! The transient view configuration describing what the consumer should
//! currently display.

use super::LabelDiff;
use pharmadb_client::{Claim, Label};

/// Display mode derived from which optional fields are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrugViewMode {
    /// Nothing selected.
    #[default]
    None,
    /// Two label revisions selected, diff available.
    LabelCompare,
    /// A patent claim is in view.
    PatentView,
}

/// A patent claim currently in view.
#[derive(Debug, Clone, PartialEq)]
pub struct PatentView {
    /// Number of the patent the claim belongs to.
    pub patent_number: String,
    /// The claim being displayed.
    pub claim: Claim,
}

/// Transient view state.
///
/// Replaced wholesale on every user interaction; no code mutates a stored
/// config in place. The diff is present exactly when both label slots are
/// populated, and only the controller writes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrugViewConfig {
    /// First selected label revision.
    pub label_one: Option<Label>,
    /// Second selected label revision.
    pub label_two: Option<Label>,
    /// Computed diff between the two selected labels.
    pub label_diff: Option<LabelDiff>,
    /// Patent claim overlay, when open.
    pub patent_view: Option<PatentView>,
}

impl DrugViewConfig {
    /// Current display mode. Patent view takes precedence over the label
    /// comparison; the two are mutually exclusive display states.
    pub fn mode(&self) -> DrugViewMode {
        if self.patent_view.is_some() {
            DrugViewMode::PatentView
        } else if self.label_one.is_some() && self.label_two.is_some() {
            DrugViewMode::LabelCompare
        } else {
            DrugViewMode::None
        }
    }

    /// Whether a patent claim is currently in view.
    pub fn is_patent_in_view(&self) -> bool {
        self.patent_view.is_some()
    }

    /// Number of populated label slots (0, 1 or 2).
    pub fn labels_selected(&self) -> usize {
        [&self.label_one, &self.label_two]
            .iter()
            .filter(|l| l.is_some())
            .count()
    }

    /// Copy of this config with the patent fields cleared and the label
    /// selection (and its diff) carried over.
    pub fn without_patent_view(&self) -> Self {
        Self {
            label_one: self.label_one.clone(),
            label_two: self.label_two.clone(),
            label_diff: self.label_diff.clone(),
            patent_view: None,
        }
    }

    /// Copy of this config with the given claim in view, preserving the
    /// label selection.
    pub fn with_patent_view(&self, patent_number: String, claim: Claim) -> Self {
        Self {
            label_one: self.label_one.clone(),
            label_two: self.label_two.clone(),
            label_diff: self.label_diff.clone(),
            patent_view: Some(PatentView {
                patent_number,
                claim,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn label() -> Label {
        Label {
            published_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            application_numbers: vec!["NDA123".into()],
            sections: Vec::new(),
        }
    }

    #[test]
    fn test_mode_none_by_default() {
        assert_eq!(DrugViewConfig::default().mode(), DrugViewMode::None);
    }

    #[test]
    fn test_mode_requires_both_labels() {
        let config = DrugViewConfig {
            label_one: Some(label()),
            ..Default::default()
        };
        assert_eq!(config.mode(), DrugViewMode::None);
        assert_eq!(config.labels_selected(), 1);

        let config = DrugViewConfig {
            label_one: Some(label()),
            label_two: Some(label()),
            ..Default::default()
        };
        assert_eq!(config.mode(), DrugViewMode::LabelCompare);
        assert_eq!(config.labels_selected(), 2);
    }

    #[test]
    fn test_patent_view_takes_precedence() {
        let config = DrugViewConfig {
            label_one: Some(label()),
            label_two: Some(label()),
            ..Default::default()
        };
        let config = config.with_patent_view(
            "6087380".into(),
            Claim {
                claim_number: 1,
                claim_text: "A method...".into(),
            },
        );

        assert_eq!(config.mode(), DrugViewMode::PatentView);
        assert!(config.is_patent_in_view());

        // Closing the overlay falls back to the label comparison.
        let closed = config.without_patent_view();
        assert_eq!(closed.mode(), DrugViewMode::LabelCompare);
        assert_eq!(closed.labels_selected(), 2);
    }
}
