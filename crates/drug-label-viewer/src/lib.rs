//! # drug-label-viewer
//!
//! View-state management, label diffing and timeline projection for drug
//! label research. Given a fetched drug record, this crate lets a consumer
//! select two label revisions, computes a per-section semantic diff between
//! them, and cross-references the result with patent-claim metadata.
//!
//! ## Design Principles
//!
//! This crate is **instrumented** — it receives data and emits events
//! without performing any I/O of its own. This enables:
//!
//! - Testability without mocking HTTP clients
//! - Reusability behind any rendering layer (TUI, web, plain text)
//! - Clear separation of concerns
//!
//! ## Action-Based Architecture
//!
//! User interactions arrive as [`ViewAction`] variants dispatched through
//! [`DrugViewState::handle_action`]. Every transition replaces the current
//! [`DrugViewConfig`] wholesale; nothing mutates it in place, and the diff
//! is recomputed exactly when both label slots are populated.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use drug_label_viewer::{DrugViewState, ViewAction, project_timeline};
//!
//! let markers = project_timeline(&drug);
//! let mut state = DrugViewState::new(drug);
//!
//! state.handle_action(ViewAction::SelectLabel(0));
//! state.handle_action(ViewAction::SelectLabel(1));
//!
//! if let Some(diff) = &state.config().label_diff {
//!     // render diff.sections
//! }
//! ```

pub mod action;
pub mod diff;
pub mod error;
pub mod event;
pub mod model;
pub mod state;
pub mod timeline;

// Re-export commonly used types
pub use action::ViewAction;
pub use error::ViewError;
pub use event::ViewEvent;
pub use model::{
    DiffSpan, DrugViewConfig, DrugViewMode, LabelDiff, PatentView, SectionDiff,
    SectionDiffOutcome, SpanKind,
};
pub use state::DrugViewState;
pub use timeline::{project_timeline, MarkerColor, MarkerKind, TimelineMarker};
