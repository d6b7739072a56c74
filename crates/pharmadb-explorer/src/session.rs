//! Fetch orchestration for one drug view.
//!
//! The session owns the loading flag, the last fetch error, the timeline
//! markers and the view controller. Fetch completions carry the
//! application number they were issued for; a completion that no longer
//! matches the currently requested drug is discarded, so a user
//! navigating away mid-fetch can never see stale data win.

use drug_label_viewer::{project_timeline, DrugViewState, TimelineMarker};
use log::{info, warn};
use pharmadb_client::{ApiError, Drug, DrugApi};

/// State of one drug-loading session.
#[derive(Debug, Default)]
pub struct Session {
    requested: Option<String>,
    loading: bool,
    error: Option<String>,
    markers: Vec<TimelineMarker>,
    view: Option<DrugViewState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch for `application_number` as in flight.
    ///
    /// Requesting a different drug supersedes any earlier in-flight
    /// fetch; its completion will be discarded.
    pub fn begin_fetch(&mut self, application_number: &str) {
        self.requested = Some(application_number.to_string());
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch completion.
    ///
    /// Returns `false` (and changes nothing) when the completion is
    /// stale, i.e. tagged with an application number that is no longer
    /// the requested one. On failure the loading flag is still cleared
    /// and the error recorded — a failed fetch must end in a visible
    /// error state, never a stuck spinner.
    pub fn apply_fetch(
        &mut self,
        application_number: &str,
        result: Result<Drug, ApiError>,
    ) -> bool {
        if self.requested.as_deref() != Some(application_number) {
            warn!(
                "Discarding stale fetch completion for {} (current: {:?})",
                application_number, self.requested
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(drug) => {
                info!(
                    "Loaded {}: {} labels, {} patents",
                    application_number,
                    drug.labels.len(),
                    drug.patents.len()
                );
                self.markers = project_timeline(&drug);
                self.view = Some(DrugViewState::new(drug));
                self.error = None;
            }
            Err(err) => {
                warn!("Fetch for {} failed: {}", application_number, err);
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Fetch a drug and apply the result in one step.
    pub async fn load(&mut self, api: &dyn DrugApi, application_number: &str) -> bool {
        self.begin_fetch(application_number);
        let result = api.drug_by_application_number(application_number).await;
        self.apply_fetch(application_number, result)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn markers(&self) -> &[TimelineMarker] {
        &self.markers
    }

    pub fn view(&self) -> Option<&DrugViewState> {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> Option<&mut DrugViewState> {
        self.view.as_mut()
    }
}
