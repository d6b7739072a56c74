//! Data structures owned by the viewer: diff results and view configuration.

mod diff;
mod view_config;

pub use diff::{DiffSpan, LabelDiff, SectionDiff, SectionDiffOutcome, SpanKind};
pub use view_config::{DrugViewConfig, DrugViewMode, PatentView};
