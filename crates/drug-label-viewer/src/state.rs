//! The view controller: owns the current view configuration and derives
//! the label diff from it.

use crate::action::ViewAction;
use crate::diff::compute_label_diff;
use crate::error::ViewError;
use crate::event::ViewEvent;
use crate::model::DrugViewConfig;
use log::debug;
use pharmadb_client::Drug;

/// View controller for one drug.
///
/// Holds the fetched drug record and the current [`DrugViewConfig`]. All
/// transitions go through [`set_view_config`](Self::set_view_config) (or
/// the convenience handlers that build a replacement config and delegate
/// to it); the stored config is never mutated in place.
#[derive(Debug, Clone)]
pub struct DrugViewState {
    drug: Drug,
    config: DrugViewConfig,
}

impl DrugViewState {
    /// Create a controller for a freshly fetched drug, with nothing
    /// selected.
    pub fn new(drug: Drug) -> Self {
        Self {
            drug,
            config: DrugViewConfig::default(),
        }
    }

    /// The drug record this controller was built from.
    pub fn drug(&self) -> &Drug {
        &self.drug
    }

    /// The current view configuration.
    pub fn config(&self) -> &DrugViewConfig {
        &self.config
    }

    /// The single state-transition entry point.
    ///
    /// Stores `config` as the current state. The label diff is always
    /// rederived here: computed when both label slots are populated,
    /// cleared otherwise — a config arriving with fewer than two labels
    /// never keeps a stale diff.
    pub fn set_view_config(&mut self, mut config: DrugViewConfig) -> Vec<ViewEvent> {
        let mut events = Vec::new();

        config.label_diff = match (&config.label_one, &config.label_two) {
            (Some(one), Some(two)) => {
                let diff = compute_label_diff(one, two);
                debug!("Recomputed label diff over {} sections", diff.sections.len());
                events.push(ViewEvent::DiffRecomputed {
                    section_count: diff.sections.len(),
                });
                Some(diff)
            }
            _ => None,
        };

        events.push(ViewEvent::SelectionChanged {
            labels_selected: config.labels_selected(),
        });

        self.config = config;
        events
    }

    /// Open a patent claim overlay, preserving the label selection.
    ///
    /// Both lookups are guarded: an unmatched patent or claim number
    /// yields an explicit error instead of a panic.
    pub fn select_patent_claim(
        &mut self,
        patent_number: &str,
        claim_number: u32,
    ) -> Result<Vec<ViewEvent>, ViewError> {
        let patent = self
            .drug
            .patents
            .iter()
            .find(|p| p.patent_number == patent_number)
            .ok_or_else(|| ViewError::PatentNotFound(patent_number.to_string()))?;

        let claim = patent
            .claims
            .iter()
            .find(|c| c.claim_number == claim_number)
            .ok_or_else(|| ViewError::ClaimNotFound {
                patent_number: patent_number.to_string(),
                claim_number,
            })?
            .clone();

        let next = self
            .config
            .with_patent_view(patent_number.to_string(), claim);

        let mut events = self.set_view_config(next);
        events.push(ViewEvent::PatentOpened {
            patent_number: patent_number.to_string(),
            claim_number,
        });
        Ok(events)
    }

    /// Close the patent claim overlay, leaving the label selection
    /// untouched.
    pub fn close_patent_view(&mut self) -> Vec<ViewEvent> {
        let next = self.config.without_patent_view();
        let mut events = self.set_view_config(next);
        events.push(ViewEvent::PatentClosed);
        events
    }

    /// Select a label revision by index.
    ///
    /// Fills the first empty slot; with both slots already full, starts a
    /// fresh selection. Selecting a label closes any open patent overlay.
    pub fn select_label(&mut self, index: usize) -> Result<Vec<ViewEvent>, ViewError> {
        let label = self
            .drug
            .labels
            .get(index)
            .ok_or(ViewError::LabelOutOfRange(index))?
            .clone();

        let (label_one, label_two) = match (&self.config.label_one, &self.config.label_two) {
            (None, _) => (Some(label), self.config.label_two.clone()),
            (Some(one), None) => (Some(one.clone()), Some(label)),
            (Some(_), Some(_)) => (Some(label), None),
        };

        Ok(self.set_view_config(DrugViewConfig {
            label_one,
            label_two,
            label_diff: None,
            patent_view: None,
        }))
    }

    /// Clear both label slots and the diff.
    pub fn clear_labels(&mut self) -> Vec<ViewEvent> {
        let next = DrugViewConfig {
            patent_view: self.config.patent_view.clone(),
            ..Default::default()
        };
        self.set_view_config(next)
    }

    /// Dispatch a user interaction.
    ///
    /// Lookup failures are surfaced as [`ViewEvent::LookupFailed`] so the
    /// rendering layer can show a not-found state; the current config is
    /// left unchanged in that case.
    pub fn handle_action(&mut self, action: ViewAction) -> Vec<ViewEvent> {
        let result = match action {
            ViewAction::SelectLabel(index) => self.select_label(index),
            ViewAction::ClearLabels => Ok(self.clear_labels()),
            ViewAction::SelectPatentClaim {
                patent_number,
                claim_number,
            } => self.select_patent_claim(&patent_number, claim_number),
            ViewAction::ClosePatentView => Ok(self.close_patent_view()),
        };

        result.unwrap_or_else(|err| vec![ViewEvent::LookupFailed(err)])
    }
}
