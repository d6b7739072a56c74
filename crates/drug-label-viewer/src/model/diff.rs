//! Diff data structures representing the textual changes between two labels.

use pharmadb_client::ClaimScore;

/// A computed diff between two selected label revisions.
///
/// Holds one entry per section of the first label, in the first label's
/// section order. Created by the view controller when both label slots
/// are populated, immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDiff {
    /// Per-section comparison results.
    pub sections: Vec<SectionDiff>,
}

impl LabelDiff {
    /// Whether any section carries a net textual change.
    pub fn has_changes(&self) -> bool {
        self.sections.iter().any(|s| !s.is_unchanged())
    }
}

/// Comparison result for one named section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionDiff {
    /// Section name (taken from the first label).
    pub name: String,
    /// Patent-claim relevance scores of the second label's section.
    /// Empty when the counterpart section is missing.
    pub scores: Vec<ClaimScore>,
    /// The comparison outcome.
    pub outcome: SectionDiffOutcome,
}

impl SectionDiff {
    /// Whether this section is textually identical in both labels.
    pub fn is_unchanged(&self) -> bool {
        match &self.outcome {
            SectionDiffOutcome::Compared(spans) => {
                spans.iter().all(|s| s.kind == SpanKind::Equal)
            }
            SectionDiffOutcome::MissingCounterpart => false,
        }
    }
}

/// Outcome of comparing one section across the two labels.
///
/// A section of the first label with no same-named section in the second
/// is reported explicitly instead of being skipped or producing an empty
/// diff, so the result always has exactly as many entries as the first
/// label has sections.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionDiffOutcome {
    /// Both labels carry the section; the spans transform the first
    /// label's text into the second label's.
    Compared(Vec<DiffSpan>),
    /// The second label has no section with this name.
    MissingCounterpart,
}

/// A single edit span in a section diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSpan {
    /// Span type.
    pub kind: SpanKind,
    /// The text covered by this span.
    pub text: String,
}

impl DiffSpan {
    /// Create a span present in both texts.
    pub fn equal(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Equal,
            text: text.into(),
        }
    }

    /// Create a span present only in the second text.
    pub fn insert(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Insert,
            text: text.into(),
        }
    }

    /// Create a span present only in the first text.
    pub fn delete(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Delete,
            text: text.into(),
        }
    }
}

/// Span type in a section diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Text shared by both versions.
    Equal,
    /// Text added in the second version.
    Insert,
    /// Text removed from the first version.
    Delete,
}

impl SpanKind {
    /// Get the prefix character for this span type.
    pub fn prefix(&self) -> char {
        match self {
            SpanKind::Equal => ' ',
            SpanKind::Insert => '+',
            SpanKind::Delete => '-',
        }
    }
}
