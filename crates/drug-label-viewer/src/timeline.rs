//! Projection of a drug record into timeline markers.
//!
//! One marker per label and one per patent, in source order, labels
//! first. Pure apart from the per-label color draw, which is assigned at
//! projection time and is not stable across reloads.

use chrono::NaiveDate;
use pharmadb_client::Drug;
use rand::Rng;
use uuid::Uuid;

/// Factor by which a marker's border is darkened relative to its fill.
const BORDER_DARKEN: f32 = 0.666;

/// What a timeline marker represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// A label revision.
    Label,
    /// A patent.
    Patent,
}

impl MarkerKind {
    /// Single-character marker content.
    pub fn as_char(&self) -> char {
        match self {
            MarkerKind::Label => 'L',
            MarkerKind::Patent => 'P',
        }
    }

    /// Timeline group this marker belongs to.
    pub fn group(&self) -> &'static str {
        match self {
            MarkerKind::Label => "label",
            MarkerKind::Patent => "patent",
        }
    }
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Scale each channel down by `factor` (0.0 keeps the color, 1.0
    /// yields black).
    pub fn darken(&self, factor: f32) -> Rgb {
        let scale = (1.0 - factor).clamp(0.0, 1.0);
        Rgb {
            r: (self.r as f32 * scale) as u8,
            g: (self.g as f32 * scale) as u8,
            b: (self.b as f32 * scale) as u8,
        }
    }
}

/// Fill and border colors for a label marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerColor {
    /// Light fill color.
    pub fill: Rgb,
    /// Darkened variant used for the border.
    pub border: Rgb,
}

impl MarkerColor {
    /// Draw a random light fill and derive its border.
    fn random_light() -> Self {
        let mut rng = rand::thread_rng();
        let fill = Rgb {
            r: rng.gen_range(140..=255),
            g: rng.gen_range(140..=255),
            b: rng.gen_range(140..=255),
        };
        MarkerColor {
            fill,
            border: fill.darken(BORDER_DARKEN),
        }
    }
}

/// One marker on the drug timeline.
///
/// Created once per fetch and immutable thereafter. `source_index` points
/// back into the drug's label or patent array, depending on `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineMarker {
    /// Unique marker id.
    pub id: Uuid,
    /// Whether this marks a label or a patent.
    pub kind: MarkerKind,
    /// Date the marker sits at.
    pub start: NaiveDate,
    /// Display title (application number for labels, patent number for
    /// patents).
    pub title: String,
    /// Fill/border color; labels only.
    pub color: Option<MarkerColor>,
    /// Index into the source array of `kind`.
    pub source_index: usize,
}

impl TimelineMarker {
    /// Single-character content for rendering.
    pub fn content(&self) -> char {
        self.kind.as_char()
    }

    /// Timeline group name.
    pub fn group(&self) -> &'static str {
        self.kind.group()
    }
}

/// Project a drug record into timeline markers.
///
/// Produces exactly `labels.len() + patents.len()` markers, preserving
/// relative source order within each kind, labels first.
pub fn project_timeline(drug: &Drug) -> Vec<TimelineMarker> {
    let mut markers = Vec::with_capacity(drug.labels.len() + drug.patents.len());

    for (index, label) in drug.labels.iter().enumerate() {
        let title = label
            .application_numbers
            .first()
            .cloned()
            .unwrap_or_else(|| drug.application_number.clone());
        markers.push(TimelineMarker {
            id: Uuid::new_v4(),
            kind: MarkerKind::Label,
            start: label.published_date,
            title,
            color: Some(MarkerColor::random_light()),
            source_index: index,
        });
    }

    for (index, patent) in drug.patents.iter().enumerate() {
        markers.push(TimelineMarker {
            id: Uuid::new_v4(),
            kind: MarkerKind::Patent,
            start: patent.published_date,
            title: patent.patent_number.clone(),
            color: None,
            source_index: index,
        });
    }

    markers
}
