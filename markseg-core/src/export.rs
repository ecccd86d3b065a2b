//! Export view of a document
//!
//! Exporters lay out the lossless sequence page by page; this module prepares
//! that sequence as passages with any residual markup removed. Page layout is
//! left to the exporter.

use crate::markup::{strip_markup, MarkerId};
use crate::segment::{Segment, SegmentKind};
use crate::segmenter::Segmenter;
use serde::Serialize;

/// One passage of exported text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPassage {
    /// Plain or flagged
    pub kind: SegmentKind,
    /// Text with any tag-like markup removed
    pub text: String,
    /// Ids of the flagged regions in this passage
    pub marker_ids: Vec<MarkerId>,
}

/// A document prepared for export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    /// Document title
    pub title: String,
    /// Passages in document order
    pub passages: Vec<ExportPassage>,
}

impl ExportDocument {
    /// Segment `text` with a zero window and prepare it for export
    pub fn build(segmenter: &Segmenter, title: impl Into<String>, text: &str) -> Self {
        Self::from_segments(title, &segmenter.segment_lossless(text))
    }

    /// Prepare an existing lossless sequence for export
    pub fn from_segments(title: impl Into<String>, segments: &[Segment]) -> Self {
        let passages = segments
            .iter()
            .map(|segment| ExportPassage {
                kind: segment.kind,
                text: match segment.kind {
                    SegmentKind::Flagged => strip_markup(&segment.text),
                    SegmentKind::Plain => segment.text.clone(),
                },
                marker_ids: segment.marker_ids().collect(),
            })
            .collect();

        Self {
            title: title.into(),
            passages,
        }
    }

    /// Number of flagged passages
    pub fn flagged_count(&self) -> usize {
        self.passages
            .iter()
            .filter(|p| p.kind == SegmentKind::Flagged)
            .count()
    }

    /// Flagged passages with their marker ids
    pub fn flagged(&self) -> impl Iterator<Item = &ExportPassage> {
        self.passages
            .iter()
            .filter(|p| p.kind == SegmentKind::Flagged)
    }
}
