//! Segment types produced by the segmenter

use crate::markup::{MarkerId, MarkerRegion, MarkupSyntax};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Range;

/// Kind of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Unflagged text, reproduced verbatim
    Plain,
    /// One or more flagged regions with their retained context
    Flagged,
}

/// Position of a stripped marker region inside a flagged segment's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSpan {
    /// Marker id as supplied upstream
    pub id: MarkerId,
    /// Byte range of the region content within [`Segment::text`]
    pub range: Range<usize>,
    /// Verbatim start token that was stripped
    pub open_token: String,
}

/// Marker spans of one segment; almost always a single entry
pub type MarkerSpans = SmallVec<[MarkerSpan; 1]>;

/// A contiguous, typed piece of output text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Plain or flagged
    pub kind: SegmentKind,
    /// Literal text; flagged segments have their delimiters stripped
    pub text: String,
    /// Presentation state toggled by renderers, never read by the segmenter
    pub expanded: bool,
    /// Stripped regions in document order (empty for plain segments)
    #[serde(default, skip_serializing_if = "MarkerSpans::is_empty")]
    pub markers: MarkerSpans,
}

impl Segment {
    /// Create a plain segment
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Plain,
            text: text.into(),
            expanded: false,
            markers: SmallVec::new(),
        }
    }

    /// Build a flagged segment covering `start..end` of `text`
    ///
    /// `regions` must lie inside the window in document order; their tokens
    /// are stripped and recorded as [`MarkerSpan`]s.
    pub(crate) fn flagged(text: &str, start: usize, end: usize, regions: &[MarkerRegion]) -> Self {
        let mut buffer = String::with_capacity(end - start);
        let mut markers = MarkerSpans::new();
        let mut at = start;

        for region in regions {
            buffer.push_str(&text[at..region.start]);
            let content_start = buffer.len();
            buffer.push_str(region.content(text));
            markers.push(MarkerSpan {
                id: region.id,
                range: content_start..buffer.len(),
                open_token: region.open_token(text).to_string(),
            });
            at = region.end;
        }
        buffer.push_str(&text[at..end]);

        Self {
            kind: SegmentKind::Flagged,
            text: buffer,
            expanded: true,
            markers,
        }
    }

    /// Whether this segment is flagged
    pub fn is_flagged(&self) -> bool {
        self.kind == SegmentKind::Flagged
    }

    /// Flip the presentation state
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Ids of the regions inside this segment
    pub fn marker_ids(&self) -> impl Iterator<Item = MarkerId> + '_ {
        self.markers.iter().map(|m| m.id)
    }

    /// Text of each stripped region, in order
    pub fn flagged_passages(&self) -> impl Iterator<Item = &str> + '_ {
        self.markers.iter().map(|m| &self.text[m.range.clone()])
    }

    /// Re-insert the stripped delimiters
    pub fn to_markup(&self, syntax: &MarkupSyntax) -> String {
        let mut out = String::with_capacity(
            self.text.len()
                + self
                    .markers
                    .iter()
                    .map(|m| m.open_token.len() + syntax.close_token.len())
                    .sum::<usize>(),
        );
        let mut at = 0;

        for marker in &self.markers {
            out.push_str(&self.text[at..marker.range.start]);
            out.push_str(&marker.open_token);
            out.push_str(&self.text[marker.range.clone()]);
            out.push_str(&syntax.close_token);
            at = marker.range.end;
        }
        out.push_str(&self.text[at..]);
        out
    }
}

/// Rebuild the marked-up input from a segment sequence
pub fn reconstruct(segments: &[Segment], syntax: &MarkupSyntax) -> String {
    segments.iter().map(|s| s.to_markup(syntax)).collect()
}

/// Marker ids across a sequence, in document order
pub fn marker_ids(segments: &[Segment]) -> Vec<MarkerId> {
    segments.iter().flat_map(Segment::marker_ids).collect()
}
