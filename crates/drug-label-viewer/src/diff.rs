//! Semantic text diffing between two label revisions.
//!
//! The heavy lifting is delegated to the `similar` crate; this module
//! tokenizes at word granularity and coalesces the raw change stream
//! into minimal human-readable edit spans.

use crate::model::{DiffSpan, LabelDiff, SectionDiff, SectionDiffOutcome, SpanKind};
use log::debug;
use pharmadb_client::Label;
use similar::{ChangeTag, TextDiff};

/// Diff two section bodies into edit spans.
///
/// Spans transform `old` into `new`: concatenating the Equal and Delete
/// spans reproduces `old`, concatenating Equal and Insert reproduces
/// `new`. Adjacent changes of the same kind are merged, so identical
/// texts produce a single Equal span.
pub fn diff_section_text(old: &str, new: &str) -> Vec<DiffSpan> {
    let diff = TextDiff::from_words(old, new);

    let mut spans: Vec<DiffSpan> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SpanKind::Equal,
            ChangeTag::Delete => SpanKind::Delete,
            ChangeTag::Insert => SpanKind::Insert,
        };
        match spans.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => spans.push(DiffSpan {
                kind,
                text: change.value().to_string(),
            }),
        }
    }
    spans
}

/// Compare two labels section by section.
///
/// Produces one entry per section of `label_one`, in `label_one`'s
/// section order. Sections are matched across labels by exact name; a
/// section with no same-named counterpart in `label_two` is reported as
/// [`SectionDiffOutcome::MissingCounterpart`] rather than skipped.
/// Relevance scores are taken from `label_two`'s side of each match.
pub fn compute_label_diff(label_one: &Label, label_two: &Label) -> LabelDiff {
    let sections = label_one
        .sections
        .iter()
        .map(|section| {
            match label_two
                .sections
                .iter()
                .find(|candidate| candidate.name == section.name)
            {
                Some(counterpart) => SectionDiff {
                    name: section.name.clone(),
                    scores: counterpart.scores.clone(),
                    outcome: SectionDiffOutcome::Compared(diff_section_text(
                        &section.text,
                        &counterpart.text,
                    )),
                },
                None => {
                    debug!(
                        "Section {:?} has no counterpart in the second label",
                        section.name
                    );
                    SectionDiff {
                        name: section.name.clone(),
                        scores: Vec::new(),
                        outcome: SectionDiffOutcome::MissingCounterpart,
                    }
                }
            }
        })
        .collect();

    LabelDiff { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pharmadb_client::{ClaimScore, Section};
    use pretty_assertions::assert_eq;

    fn label(sections: Vec<Section>) -> Label {
        Label {
            published_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            application_numbers: vec!["NDA123".into()],
            sections,
        }
    }

    fn section(name: &str, text: &str) -> Section {
        Section {
            name: name.into(),
            text: text.into(),
            scores: Vec::new(),
        }
    }

    /// Concatenate the spans back into the (old, new) texts.
    fn reconstruct(spans: &[DiffSpan]) -> (String, String) {
        let mut old = String::new();
        let mut new = String::new();
        for span in spans {
            match span.kind {
                SpanKind::Equal => {
                    old.push_str(&span.text);
                    new.push_str(&span.text);
                }
                SpanKind::Delete => old.push_str(&span.text),
                SpanKind::Insert => new.push_str(&span.text),
            }
        }
        (old, new)
    }

    #[test]
    fn test_identical_text_yields_only_equal_spans() {
        let text = "Take one tablet daily with food.";
        let spans = diff_section_text(text, text);

        assert!(spans.iter().all(|s| s.kind == SpanKind::Equal));
        let (old, new) = reconstruct(&spans);
        assert_eq!(old, text);
        assert_eq!(new, text);
    }

    #[test]
    fn test_word_replacement() {
        let spans = diff_section_text("Text A", "Text B");

        assert_eq!(
            spans,
            vec![
                DiffSpan::equal("Text "),
                DiffSpan::delete("A"),
                DiffSpan::insert("B"),
            ]
        );
    }

    #[test]
    fn test_spans_reconstruct_both_sides() {
        let old = "Indicated for treatment of hypertension in adults.";
        let new = "Indicated for treatment of severe hypertension in adults and children.";
        let spans = diff_section_text(old, new);

        let (rebuilt_old, rebuilt_new) = reconstruct(&spans);
        assert_eq!(rebuilt_old, old);
        assert_eq!(rebuilt_new, new);
    }

    #[test]
    fn test_pure_insertion_and_deletion() {
        let spans = diff_section_text("", "brand new warning");
        assert_eq!(spans, vec![DiffSpan::insert("brand new warning")]);

        let spans = diff_section_text("obsolete warning", "");
        assert_eq!(spans, vec![DiffSpan::delete("obsolete warning")]);
    }

    #[test]
    fn test_label_diff_preserves_section_order_and_count() {
        let one = label(vec![
            section("Indications", "Text A"),
            section("Warnings", "Same text"),
            section("Dosage", "Once daily"),
        ]);
        // Second label lists its sections in a different order.
        let two = label(vec![
            section("Dosage", "Twice daily"),
            section("Indications", "Text B"),
            section("Warnings", "Same text"),
        ]);

        let diff = compute_label_diff(&one, &two);

        let names: Vec<&str> = diff.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Indications", "Warnings", "Dosage"]);
        assert!(diff.has_changes());
        assert!(diff.sections[1].is_unchanged());
    }

    #[test]
    fn test_missing_counterpart_is_explicit() {
        let one = label(vec![
            section("Indications", "Text A"),
            section("Boxed Warning", "Serious risk"),
        ]);
        let two = label(vec![section("Indications", "Text A")]);

        let diff = compute_label_diff(&one, &two);

        assert_eq!(diff.sections.len(), 2);
        assert_eq!(
            diff.sections[1].outcome,
            SectionDiffOutcome::MissingCounterpart
        );
        assert!(diff.sections[1].scores.is_empty());
        // The matched section still gets a real comparison.
        assert!(matches!(
            diff.sections[0].outcome,
            SectionDiffOutcome::Compared(_)
        ));
    }

    #[test]
    fn test_scores_come_from_second_label() {
        let score = ClaimScore {
            patent_number: "6087380".into(),
            claim_number: 2,
            score: 0.8,
        };
        let one = label(vec![section("Indications", "Text A")]);
        let mut two = label(vec![section("Indications", "Text B")]);
        two.sections[0].scores.push(score.clone());

        let diff = compute_label_diff(&one, &two);
        assert_eq!(diff.sections[0].scores, vec![score]);
    }
}
