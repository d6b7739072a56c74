//! Plain-text rendering of timeline markers and label diffs.

use drug_label_viewer::{LabelDiff, SectionDiffOutcome, TimelineMarker};
use std::fmt::Write;

/// Render the timeline as one line per marker.
pub fn render_timeline(markers: &[TimelineMarker]) -> String {
    let mut out = String::new();
    for marker in markers {
        let _ = writeln!(
            out,
            "{} {} {:>8} {}",
            marker.content(),
            marker.start,
            marker.group(),
            marker.title
        );
    }
    out
}

/// Render a computed label diff, section by section.
///
/// Changed spans are prefixed with `+`/`-` and wrapped in brackets;
/// sections missing from the second label are called out explicitly.
pub fn render_label_diff(diff: &LabelDiff) -> String {
    let mut out = String::new();
    for section in &diff.sections {
        let _ = writeln!(out, "== {} ==", section.name);
        match &section.outcome {
            SectionDiffOutcome::Compared(spans) => {
                for span in spans {
                    match span.kind.prefix() {
                        ' ' => out.push_str(&span.text),
                        prefix => {
                            let _ = write!(out, "[{}{}]", prefix, span.text);
                        }
                    }
                }
                out.push('\n');
            }
            SectionDiffOutcome::MissingCounterpart => {
                let _ = writeln!(out, "(no matching section in the second label)");
            }
        }
        if !section.scores.is_empty() {
            let _ = writeln!(out, "-- claim relevance --");
            for score in &section.scores {
                let _ = writeln!(
                    out,
                    "patent {} claim {}: {:.2}",
                    score.patent_number, score.claim_number, score.score
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use drug_label_viewer::{DiffSpan, SectionDiff};

    #[test]
    fn test_render_diff_marks_edits() {
        let diff = LabelDiff {
            sections: vec![SectionDiff {
                name: "Indications".into(),
                scores: Vec::new(),
                outcome: SectionDiffOutcome::Compared(vec![
                    DiffSpan::equal("Text "),
                    DiffSpan::delete("A"),
                    DiffSpan::insert("B"),
                ]),
            }],
        };

        let rendered = render_label_diff(&diff);
        assert!(rendered.contains("== Indications =="));
        assert!(rendered.contains("Text [-A][+B]"));
    }

    #[test]
    fn test_render_missing_counterpart() {
        let diff = LabelDiff {
            sections: vec![SectionDiff {
                name: "Boxed Warning".into(),
                scores: Vec::new(),
                outcome: SectionDiffOutcome::MissingCounterpart,
            }],
        };

        let rendered = render_label_diff(&diff);
        assert!(rendered.contains("no matching section"));
    }
}
