//! Marked-text segmentation
//!
//! The segmenter walks the input once with a byte cursor. At each step it
//! finds the next matched marker region, grows a cluster of regions whose
//! context windows overlap, widens the cluster by the context window on each
//! side (trimmed to word boundaries), and emits the text before the window as
//! a plain segment and the window itself as one flagged segment.
//!
//! Every byte of the input ends up in exactly one segment, so the sequence is
//! lossless for any window size; the window only decides where the cuts fall.

use crate::error::Result;
use crate::markup::{MarkerRegion, MarkupScanner, MarkupSyntax};
use crate::segment::Segment;
use crate::window::{self, ContextWindow};
use log::trace;
use smallvec::SmallVec;

/// Splits marked text into plain and flagged segments
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    scanner: MarkupScanner,
}

impl Segmenter {
    /// Create a segmenter for the given markup syntax
    pub fn new(syntax: MarkupSyntax) -> Result<Self> {
        Ok(Self {
            scanner: MarkupScanner::new(syntax)?,
        })
    }

    /// The scanner used to locate regions
    pub fn scanner(&self) -> &MarkupScanner {
        &self.scanner
    }

    /// The markup syntax in use
    pub fn syntax(&self) -> &MarkupSyntax {
        self.scanner.syntax()
    }

    /// Segment `text`, keeping `window` characters of context around each region
    pub fn segment(&self, text: &str, window: ContextWindow) -> Vec<Segment> {
        let ctx = window.chars();
        let mut segments = Vec::new();
        let mut cursor = 0;
        let mut pending: Option<MarkerRegion> = None;

        while cursor < text.len() {
            let first = match pending
                .take()
                .or_else(|| self.scanner.next_region(text, cursor))
            {
                Some(region) => region,
                None => {
                    segments.push(Segment::plain(&text[cursor..]));
                    break;
                }
            };

            let mut cluster: SmallVec<[MarkerRegion; 4]> = SmallVec::new();
            cluster.push(first);

            if !window.is_zero() {
                let reach = window.merge_reach();
                let mut last_end = first.end;
                while let Some(next) = self.scanner.next_region(text, last_end) {
                    if !window::within_chars(&text[last_end..next.start], reach) {
                        pending = Some(next);
                        break;
                    }
                    trace!(
                        "merging marker {} into window of marker {} (gap within {} chars)",
                        next.id,
                        first.id,
                        reach
                    );
                    last_end = next.end;
                    cluster.push(next);
                }
            }

            let last = cluster[cluster.len() - 1];

            let mut start = window::step_back(text, cursor, first.start, ctx);
            if start > cursor {
                start = window::trim_left(text, start, first.start);
            }

            let end = if cluster.len() > 1 {
                last.end
            } else {
                let right = window::step_forward(text, last.end, ctx);
                window::trim_right(text, last.end, right)
            };

            trace!(
                "flagged window {}..{} covering {} region(s)",
                start,
                end,
                cluster.len()
            );

            if start > cursor {
                segments.push(Segment::plain(&text[cursor..start]));
            }
            segments.push(Segment::flagged(text, start, end, &cluster));
            cursor = end;
        }

        segments
    }

    /// Segment with an unbounded window (the whole document is reachable)
    pub fn segment_full(&self, text: &str) -> Vec<Segment> {
        self.segment(text, ContextWindow::FULL)
    }

    /// Segment with a zero window: one flagged segment per region, no context
    pub fn segment_lossless(&self, text: &str) -> Vec<Segment> {
        self.segment(text, ContextWindow::ZERO)
    }
}

/// Segment `text` with the default `<span id="N">` syntax
pub fn segment(text: &str, context_chars: usize) -> Vec<Segment> {
    Segmenter::default().segment(text, ContextWindow::new(context_chars))
}

/// Segment `text`, rejecting a negative `context_chars`
pub fn try_segment(text: &str, context_chars: i64) -> Result<Vec<Segment>> {
    let window = ContextWindow::try_from(context_chars)?;
    Ok(Segmenter::default().segment(text, window))
}
